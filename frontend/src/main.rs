fn main() {
    gatepass_frontend::start();
}
