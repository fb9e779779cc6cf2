// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use objlist_engine::config::{Config, ConfigBuilder};
use objlist_engine::options as engine_options;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mode: engine_options::ScanMode = args.mode.into();

        ConfigBuilder::default()
            .root(args.dir)
            .extension(args.ext)
            .mode(mode)
            .unsorted(args.unsorted)
            .pretty(args.pretty)
            .output_path(args.output)
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::ScanMode, engine_options::ScanMode, Files, Models);
