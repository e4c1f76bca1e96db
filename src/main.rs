//! Op-art gallery walk-through. Runs the gallery app.

use std::process::ExitCode;

use bevy::prelude::*;
use gallery::prelude::*;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    match GalleryBuilder::new().config(GalleryConfig::from_env()).build() {
        Ok(mut app) => match app.run() {
            AppExit::Success => ExitCode::SUCCESS,
            AppExit::Error(_) => ExitCode::FAILURE,
        },
        Err(err) => {
            eprintln!("opart_gallery: {err}");
            ExitCode::FAILURE
        }
    }
}
