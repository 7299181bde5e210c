#[actix_web::main]
async fn main() -> std::io::Result<()> {
    offer_letter_server::run().await
}
