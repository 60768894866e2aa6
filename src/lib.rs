//! Outreach: drafts outreach messages with a hosted LLM.
//!
//! A request (genre, audience, relationship, goal, ...) is turned into a
//! structured prompt by the [`composer`], sent through the
//! [`gateway::GenerationGateway`] to a [`providers::LlmProvider`], and the
//! returned variations are handed back over HTTP by the [`server`].
//!
//! Stateless: nothing is stored between requests.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

pub mod composer;
pub mod gateway;
pub mod server;
