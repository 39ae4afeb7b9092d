//! # Shop
//!
//! Order placement on top of the in-process actor framework.
//!
//! - **[model]**: data types ([`Account`](model::Account), [`Product`](model::Product),
//!   [`Order`](model::Order)) that implement the `ActorEntity` trait.
//! - **[account_actor], [catalog_actor], [order_actor]**: one resource actor per service.
//! - **[clients]**: typed clients, including the [`OrderClient`](clients::OrderClient)
//!   orchestrator that places and lists orders.
//! - **[lifecycle]**: starts and stops the whole system.
//! - **[config]**: environment-driven settings.

pub mod account_actor;
pub mod catalog_actor;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
