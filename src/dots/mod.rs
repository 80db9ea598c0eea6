/*
 *  The move-resolution and game-state engine for Dots.
 */

pub(crate) mod board;
pub mod cell;
pub mod consts;
pub mod coords;
pub mod game;
pub mod maps;
pub mod notation;
pub mod piece;
pub mod player;
pub mod portals;
pub mod settings;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, Grid},
        cell::Cell,
        consts::*,
        coords::{self, *},
        game::{Game, GameSummary, MoveReport},
        maps::MapChoice,
        notation::*,
        piece::{Direction, Piece},
        player::{Move, Player},
        portals::{Portal, PortalRegistry},
        settings::{Field, Settings}
    };
}
