fn main() {
    admin_console::run();
}
