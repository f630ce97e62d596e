// Resume analysis: reference lists, extraction, scoring, advice, and the
// pipeline that ties them into a Report. Pure and synchronous; no I/O here.

pub mod advisor;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod reference;
pub mod scorer;
