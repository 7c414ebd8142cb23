use crate::config::BoardConfig;
use crate::input::DragState;
use fnv::FnvHashMap;
use quark_core::{Board, EntityId, Registry, SelectionStrategy};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the event handlers share for the lifetime of the page.
pub struct Session {
    pub board: Board,
    pub strategy: SelectionStrategy,
    pub merge_distance: f32,
    pub elements: FnvHashMap<EntityId, web::HtmlElement>,
    /// Pair waiting on the merge dialog: (released, partner).
    pub pending: Option<(EntityId, EntityId)>,
    pub drag: DragState,
    pub area: web::HtmlElement,
    pub document: web::Document,
}

pub type SharedSession = Rc<RefCell<Session>>;

impl Session {
    pub fn new(config: BoardConfig, document: web::Document, area: web::HtmlElement) -> Self {
        Self {
            board: Board::new(Registry::builtin(), config.rules),
            strategy: config.strategy,
            merge_distance: config.merge_distance,
            elements: FnvHashMap::default(),
            pending: None,
            drag: DragState::default(),
            area,
            document,
        }
    }

    pub fn shared(self) -> SharedSession {
        Rc::new(RefCell::new(self))
    }
}
