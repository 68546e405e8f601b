pub mod config;
pub mod ctx;
pub mod emit;
pub mod ops;

use ctx::LogCtx;

// One typed log context per operation
pub fn refresh() -> LogCtx<ops::refresh::Refresh> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn channels() -> LogCtx<ops::channels::Channels> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn songs() -> LogCtx<ops::songs::Songs> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn show() -> LogCtx<ops::show::Show> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn stream() -> LogCtx<ops::stream::Stream> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn art() -> LogCtx<ops::art::Art> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn download() -> LogCtx<ops::download::Download> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn export() -> LogCtx<ops::export::Export> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
