//! Catalog renderer - one anchor card per catalog entry, revealed in a stagger

use std::rc::Rc;

use super::reveal::Reveal;
use crate::catalog::CatalogEntry;
use crate::config::CardTiming;
use crate::error::MountError;
use crate::schedule::Scheduler;
use crate::stage::Stage;

pub const CARD_CLASS: &str = "algorithm-card";
pub const CONTENT_CLASS: &str = "algorithm-card-content";

const CHEVRON_ATTRIBUTES: &[(&str, &str)] = &[
    ("class", "chevron-right"),
    ("viewBox", "0 0 24 24"),
    ("fill", "none"),
    ("stroke", "currentColor"),
    ("stroke-width", "0"),
    ("stroke-linecap", "round"),
    ("stroke-linejoin", "round"),
];

fn append_text<S: Stage>(stage: &S, parent: &S::Node, tag: &str, text: &str) -> Result<(), MountError> {
    let node = stage.create_element(tag)?;
    stage.set_text_content(&node, text);
    stage.append_child(parent, &node)
}

fn build_chevron<S: Stage>(stage: &S) -> Result<S::Node, MountError> {
    let svg = stage.create_svg_element("svg")?;
    for (name, value) in CHEVRON_ATTRIBUTES {
        stage.set_attribute(&svg, name, value)?;
    }
    let polyline = stage.create_svg_element("polyline")?;
    stage.set_attribute(&polyline, "points", "9 18 15 12 9 6")?;
    stage.append_child(&svg, &polyline)?;
    Ok(svg)
}

/// `div.algorithm-card-content > h3 + p + svg.chevron-right`
fn build_content<S: Stage>(stage: &S, entry: &CatalogEntry) -> Result<S::Node, MountError> {
    let content = stage.create_element("div")?;
    stage.set_attribute(&content, "class", CONTENT_CLASS)?;
    append_text(stage, &content, "h3", entry.title)?;
    append_text(stage, &content, "p", entry.description)?;
    stage.append_child(&content, &build_chevron(stage)?)?;
    Ok(content)
}

fn build_card<S: Stage>(stage: &S, entry: &CatalogEntry, reveal: &Reveal) -> Result<S::Node, MountError> {
    let card = stage.create_element("a")?;
    stage.set_attribute(&card, "href", entry.href)?;
    stage.set_attribute(&card, "class", CARD_CLASS)?;
    stage.set_style(&card, "background", entry.background)?;
    reveal.hide(stage, &card)?;
    stage.append_child(&card, &build_content(stage, entry)?)?;
    Ok(card)
}

/// Append every card hidden, in catalog order, then queue the reveals.
/// Card `i` reveals `stagger_ms * i` after this call.
pub fn render<S, T>(
    stage: &Rc<S>,
    scheduler: &T,
    grid: &S::Node,
    catalog: &[CatalogEntry],
    timing: &CardTiming,
) -> Result<Vec<S::Node>, MountError>
where
    S: Stage + 'static,
    T: Scheduler + ?Sized,
{
    let mut cards = Vec::with_capacity(catalog.len());
    for (index, entry) in catalog.iter().enumerate() {
        let card = build_card(&**stage, entry, &Reveal::card(timing, index))?;
        stage.append_child(grid, &card)?;
        cards.push(card);
    }

    for (index, card) in cards.iter().enumerate() {
        Reveal::card(timing, index).schedule(stage, scheduler, card.clone(), format!("card {index}"));
    }
    Ok(cards)
}
