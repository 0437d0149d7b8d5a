//! Structural extraction of clubs, teams and fixtures from saisonmanager.de
//! pages. The markup shape is an implicit contract with the site; every
//! selector lives in a named constant at the top of its module so structural
//! drift only requires touching one place.

pub(crate) mod base;
mod clubs;
mod events;
mod teams;
