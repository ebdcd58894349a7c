//! Presentation boundary.
//!
//! The loader hands complete, ordered batches to a [`Renderer`] and tells it
//! which view status to show. [`CardRenderer`] keeps the resulting cards in
//! memory, which is what the demo prints and what tests inspect.

use crate::types::PokemonRecord;
use std::fmt;

/// Embedded SVG shown when a card image fails to load
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMTIwIiBoZWlnaHQ9IjEyMCIgdmlld0JveD0iMCAwIDEyMCAxMjAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+CjxyZWN0IHdpZHRoPSIxMjAiIGhlaWdodD0iMTIwIiBmaWxsPSIjRjVGN0ZBIi8+CjxwYXRoIGQ9Ik02MCA4MEw0MCA0MEg4MEw2MCA4MFoiIGZpbGw9IiNDM0NGRTIiLz4KPHRleHQgeD0iNjAiIHk9IjEwMCIgZm9udC1mYW1pbHk9IkFyaWFsIiBmb250LXNpemU9IjEyIiBmaWxsPSIjNjY2IiB0ZXh0LWFuY2hvcj0ibWlkZGxlIj5JbWFnZW4gbm8gZGlzcG9uaWJsZTwvdGV4dD4KPC9zdmc+";

/// Alt text set together with [`PLACEHOLDER_IMAGE`]
pub const IMAGE_FALLBACK_ALT: &str = "Imagen no disponible";

/// Handle of one rendered card
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(u64);

impl NodeRef {
    /// Raw handle value
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Whether a batch replaces the rendered cards or is added after them
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    /// Clear existing cards first (initial load)
    Replace,
    /// Keep existing cards (load more)
    Append,
}

/// Which part of the view is visible
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewStatus {
    /// A batch is in flight
    #[default]
    Loading,
    /// Cards are shown
    Ready,
    /// The last load failed
    Error,
}

/// Receiver of loaded batches
pub trait Renderer {
    /// Show `records`, in order
    fn render(&mut self, records: &[PokemonRecord], mode: RenderMode);

    /// Switch the visible view status
    fn set_status(&mut self, status: ViewStatus);

    /// A card image failed to load; swap in the placeholder
    fn on_image_load_failure(&mut self, node: NodeRef);
}

/// One rendered card
#[derive(Clone, Debug, PartialEq)]
pub struct CardNode {
    /// Handle of this card
    pub node: NodeRef,
    /// Zero-padded display number (`#001`)
    pub number: String,
    /// Species name
    pub name: String,
    /// Image source; empty when the record had no image
    pub image_src: String,
    /// Image alt text
    pub image_alt: String,
    /// Height in metres
    pub height_m: Option<f64>,
    /// Weight in kilograms
    pub weight_kg: Option<f64>,
    /// Type badges
    pub categories: Vec<String>,
}

impl CardNode {
    fn from_record(node: NodeRef, record: &PokemonRecord) -> Self {
        Self {
            node,
            number: record.display_number(),
            name: record.name.clone(),
            image_src: record.image_url.clone().unwrap_or_default(),
            image_alt: record.name.clone(),
            height_m: record.height_m(),
            weight_kg: record.weight_kg(),
            categories: record.categories.clone(),
        }
    }

    /// True when the card shows the placeholder image
    pub fn shows_placeholder(&self) -> bool {
        self.image_src == PLACEHOLDER_IMAGE
    }
}

impl fmt::Display for CardNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<12}", self.number, self.name)?;
        match self.height_m {
            Some(m) => write!(f, " {m:.1}m")?,
            None => write!(f, " ?m")?,
        }
        match self.weight_kg {
            Some(kg) => write!(f, " {kg:.1}kg")?,
            None => write!(f, " ?kg")?,
        }
        write!(f, " [{}]", self.categories.join(", "))
    }
}

/// In-memory [`Renderer`] building [`CardNode`]s
#[derive(Debug, Default)]
pub struct CardRenderer {
    cards: Vec<CardNode>,
    status: ViewStatus,
    next_node: u64,
}

impl CardRenderer {
    /// Create an empty renderer showing the loading status
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered cards, in display order
    pub fn cards(&self) -> &[CardNode] {
        &self.cards
    }

    /// Currently visible status
    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Look up a card by handle
    pub fn card(&self, node: NodeRef) -> Option<&CardNode> {
        self.cards.iter().find(|c| c.node == node)
    }
}

impl Renderer for CardRenderer {
    fn render(&mut self, records: &[PokemonRecord], mode: RenderMode) {
        if mode == RenderMode::Replace {
            self.cards.clear();
        }
        for record in records {
            let node = NodeRef(self.next_node);
            self.next_node += 1;
            self.cards.push(CardNode::from_record(node, record));
        }
    }

    fn set_status(&mut self, status: ViewStatus) {
        self.status = status;
    }

    fn on_image_load_failure(&mut self, node: NodeRef) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.node == node) {
            card.image_src = PLACEHOLDER_IMAGE.to_string();
            card.image_alt = IMAGE_FALLBACK_ALT.to_string();
        } else {
            tracing::debug!(node = node.get(), "image failure for unknown card ignored");
        }
    }
}
