//! `gf-pipeline` — drives fixes through validation, speed estimation, and
//! proximity evaluation.
//!
//! # Per-fix flow
//!
//! ```text
//! FixPublisher ──mpsc──▶ FixSubscription ──▶ Pipeline::handle
//!                                              ① validate    RawFix → Fix (or Rejected)
//!                                              ② speed       SpeedEstimator::update
//!                                              ③ proximity   ProximityEngine::evaluate
//!                                              ④ sink        AlertSink callbacks
//! ```
//!
//! Fixes are handled one at a time, each to completion, on the consumer's
//! thread.  Any number of producers may hold a [`FixPublisher`]; the run
//! ends once all of them are dropped.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gf_pipeline::{EngineConfig, NoopSink, PipelineBuilder, fix_channel};
//!
//! let mut pipeline = PipelineBuilder::new(EngineConfig::default())
//!     .points(points)
//!     .build()?;
//! let (publisher, subscription) = fix_channel();
//! std::thread::spawn(move || feed(publisher));
//! let stats = pipeline.run(subscription, &mut NoopSink);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod sink;
pub mod subscription;


pub use builder::PipelineBuilder;
pub use config::EngineConfig;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{FixOutcome, Pipeline, PipelineStats};
pub use sink::{AlertSink, NoopSink};
pub use subscription::{FixPublisher, FixSubscription, fix_channel};
