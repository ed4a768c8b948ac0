//! Clients for every resource in `crudgen-definitions`.
//!
//! The build script runs the generator over the declared resources, so this
//! crate always compiles the generator's current output. Each package is a
//! module holding one module per resource plus its `option` module.
//!
//! ## Examples
//!
//! ```no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use crudgen::{ApiClient, Url};
//! use crudgen_schema::targets::{option, target};
//!
//! let api = ApiClient::builder(Url::parse("https://controller.example.com/v1/")?)
//!     .token("at_1234567890")
//!     .build()?;
//! let targets = target::Client::new(&api);
//! match targets.list("global", &[option::with_recursive(true)]).await? {
//!     Ok(items) => println!("{} targets", items.len()),
//!     Err(api_error) => eprintln!("{api_error}"),
//! }
//! # Ok(())
//! # }
//! ```

include!(concat!(env!("OUT_DIR"), "/crudgen_schema.rs"));
