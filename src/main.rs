fn main() -> Result<(), Box<dyn std::error::Error>> {
    songlist::runtime::run()
}
