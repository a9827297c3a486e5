#![warn(missing_docs)]
//! Environment interface of the carrier-robot gridworld.
//!
//! This crate defines the contract between an environment and the code that
//! drives it: observations ([`Obs`]), actions ([`Act`]), the environment
//! itself ([`Env`]) and a [`Policy`] mapping observations to actions.
//! Environments emit [`Step`] objects together with a [`Record`] of metrics
//! at every interaction step.
//!
//! [`DefaultEvaluator`] runs a policy on an environment for a number of
//! episodes and reports the average episode return.
pub mod error;
pub mod record;

mod base;
pub use base::{Act, Configurable, Env, Info, Obs, Policy, Step};

mod evaluator;
pub use evaluator::{DefaultEvaluator, Evaluator};
