#![deny(clippy::all)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::todo)]
#![allow(missing_docs)]
#![allow(clippy::missing_errors_doc)]

#[tokio::main]
async fn main() {
    app::run().await;
}


pub mod cfg {
    mod app_settings;
    mod server_settings;
    mod tester_settings;

    pub use app_settings::*;
    pub use server_settings::*;
    pub use tester_settings::*;
}

pub mod core {
    mod context;

    pub use context::*;
}

pub mod catalog {
    mod builtin;
    mod descriptor;

    pub use descriptor::*;
}

pub mod tester {
    mod request;
    mod runner;

    pub use request::*;
    pub use runner::*;
}

pub mod routes {
    pub mod assets;
    pub mod catalog;
    pub mod downloads;
    pub mod health;
    pub mod tester;
}

pub mod app {
    mod cli;
    mod router;
    mod server;

    pub use cli::*;
    pub use router::*;
    pub use server::*;
}
