use crate::dots::prelude::*;

/// A one-shot teleport between two distinct coordinates. Either end leads to the other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Portal {
    a: Coord,
    b: Coord,
}

impl Portal {
    /// Links two coordinates; a portal to the same square is a defect.
    pub fn new(a: Coord, b: Coord) -> Result<Portal> {
        if a == b {
            return Err(Defect::DegeneratePortal(a).into());
        }
        Ok(Portal { a, b })
    }

    pub fn ends(&self) -> [Coord; 2] {
        [self.a, self.b]
    }

    pub fn contains(&self, coord: &Coord) -> bool {
        self.a == *coord || self.b == *coord
    }

    /// The end across from `coord`, if `coord` is an end at all.
    pub fn opposite(&self, coord: &Coord) -> Option<Coord> {
        match *coord {
            c if c == self.a => Some(self.b),
            c if c == self.b => Some(self.a),
            _                => None,
        }
    }
}

/// The live portals of a game. No two live portals share an end.
#[derive(Clone, Debug, Default)]
pub struct PortalRegistry {
    portals: Vec<Portal>,
}

impl PortalRegistry {
    pub fn new() -> PortalRegistry {
        PortalRegistry::default()
    }

    pub fn len(&self) -> usize {
        self.portals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.portals.is_empty()
    }

    /// Registers a fresh pair; an end already in use is a defect and nothing is registered.
    pub fn insert(&mut self, portal: Portal) -> Result<()> {
        if let Some(shared) = portal.ends().into_iter().find(|end| self.is_member(end)) {
            return Err(Defect::PortalOverlap(shared).into());
        }
        log::debug!("linked portal {} <-> {}", portal.a, portal.b);
        self.portals.push(portal);
        Ok(())
    }

    pub fn is_member(&self, coord: &Coord) -> bool {
        self.portals.iter().any(|p| p.contains(coord))
    }

    /// The end across from `coord` in its live portal.
    pub fn opposite(&self, coord: &Coord) -> Option<Coord> {
        self.portals.iter().find_map(|p| p.opposite(coord))
    }

    /// Consumes the portal that `coord` belongs to, returning the exit.
    pub fn take(&mut self, coord: &Coord) -> Option<Coord> {
        let index = self.portals.iter().position(|p| p.contains(coord))?;
        self.portals.swap_remove(index).opposite(coord)
    }
}
