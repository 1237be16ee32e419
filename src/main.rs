fn main() {
    tc_driver::main()
}
