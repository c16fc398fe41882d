//! Per-family context factories.
//!
//! These are the entry points script execution calls to obtain "the
//! current object family" as a context value. A factory returns `None`
//! when there is nothing to wrap (empty family, unknown id); the caller
//! turns that into the empty value.

use starscript_foundation::Context;
use starscript_storage::{ObjectKind, World};

use crate::config::ConfigContext;
use crate::family::FamilyContext;
use crate::fixed::FixedContext;

/// Context over all ships, positioned on the lowest ship id.
#[must_use]
pub fn ships(world: &World) -> Option<Box<dyn Context>> {
    FamilyContext::first(world.universe(), ObjectKind::Ship)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context over all planets, positioned on the lowest planet id.
#[must_use]
pub fn planets(world: &World) -> Option<Box<dyn Context>> {
    FamilyContext::first(world.universe(), ObjectKind::Planet)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context over all minefields, positioned on the lowest minefield id.
#[must_use]
pub fn minefields(world: &World) -> Option<Box<dyn Context>> {
    FamilyContext::first(world.universe(), ObjectKind::Minefield)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context positioned on the ship with the given id.
#[must_use]
pub fn ship(world: &World, ext_id: i32) -> Option<Box<dyn Context>> {
    FamilyContext::at(world.universe(), ObjectKind::Ship, ext_id)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context positioned on the planet with the given id.
#[must_use]
pub fn planet(world: &World, ext_id: i32) -> Option<Box<dyn Context>> {
    FamilyContext::at(world.universe(), ObjectKind::Planet, ext_id)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context over a single explosion marker.
#[must_use]
pub fn explosion(world: &World, ext_id: i32) -> Option<Box<dyn Context>> {
    FixedContext::new(world.universe(), ObjectKind::Explosion, ext_id)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context over a single starchart drawing.
#[must_use]
pub fn drawing(world: &World, ext_id: i32) -> Option<Box<dyn Context>> {
    FixedContext::new(world.universe(), ObjectKind::Drawing, ext_id)
        .map(|ctx| Box::new(ctx) as Box<dyn Context>)
}

/// Context over the configuration store. Always available.
#[must_use]
pub fn config(world: &World) -> Box<dyn Context> {
    Box::new(ConfigContext::new(world.config()))
}
