fn main() {
    pmshell::mount();
}
