//! Demo program that updates one entry in the remote user dictionary.
//!
//! ```shell
//! update-user-dict <entry-id>
//! ```

use udict_client::{
    DictionaryClient, DictionaryEntry, ReqwestHttpSend, RequestSigner, ServerConfig,
    StaticCredentialProvider,
};
use udict_core::{Context, Signer};

// Demo key pair for the staging dictionary service.
const ACCESS_KEY: &str = "ACCESS_KEY";
const SECRET_KEY: &str = "SECRET_KEY";

#[tokio::main]
async fn main() {
    env_logger::init();

    let Some(entry_id) = std::env::args().nth(1) else {
        eprintln!("usage: update-user-dict <entry-id>");
        std::process::exit(2);
    };

    let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
    let signer = Signer::new(
        ctx.clone(),
        StaticCredentialProvider::new(ACCESS_KEY, SECRET_KEY),
        RequestSigner::new(),
    );
    let client = DictionaryClient::new(ctx, ServerConfig::default(), signer);

    // Demo payload; a real caller would supply its own entry.
    let entry = DictionaryEntry::new("ja", "金曜日", "en", "FRIDAY");

    match client.update_entry(&entry_id, &entry).await {
        Ok(response) => {
            println!("Server response:");
            println!("{response}");
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
