use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::animator::PageAnimator;
use crate::config::AnimatorConfig;
use crate::schedule::TimeoutScheduler;
use crate::stage::WebStage;

const PAGE_CSS: &str = r#"
:root {
  --indigo-400: #818cf8; --indigo-600: #4f46e5;
  --purple-400: #c084fc; --purple-600: #9333ea;
  --pink-400: #f472b6;   --pink-600: #db2777;
  --fuchsia-400: #e879f9; --fuchsia-600: #c026d3;
  --teal-400: #2dd4bf;   --teal-600: #0d9488;
}
body { margin: 0; background: #0f0f1a; color: #e5e7eb; font-family: system-ui, -apple-system, sans-serif; }
.page-header { position: relative; overflow: hidden; padding: 96px 20px 80px; text-align: center; background: linear-gradient(135deg, #312e81, #581c87); }
.geometric-svg { position: absolute; inset: 0; width: 100%; height: 100%; }
.geometric-svg path { transform-origin: center; }
.header-content { position: relative; max-width: 720px; margin: 0 auto; }
.header-content h1 { font-size: 48px; font-weight: 700; margin: 0 0 16px; letter-spacing: -1px; }
.header-content p { font-size: 20px; color: #c7d2fe; margin: 0; line-height: 1.6; }
.page-main { max-width: 960px; margin: 0 auto; padding: 48px 20px; }
.about-section { margin-bottom: 48px; }
.about-section h2 { font-size: 28px; margin: 0 0 12px; }
.about-section p { color: #9ca3af; font-size: 16px; line-height: 1.6; margin: 0; }
.algorithms-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 20px; }
.algorithm-card { display: block; border-radius: 12px; padding: 24px; color: white; text-decoration: none; }
.algorithm-card-content { position: relative; padding-right: 28px; }
.algorithm-card-content h3 { font-size: 20px; margin: 0 0 8px; }
.algorithm-card-content p { font-size: 14px; margin: 0; line-height: 1.5; opacity: 0.9; }
.chevron-right { position: absolute; right: 0; top: 50%; width: 20px; height: 20px; margin-top: -10px; fill: currentColor; }
footer { text-align: center; color: #4b5563; font-size: 13px; padding: 32px 20px 48px; }
"#;

pub fn fresh_rng() -> SmallRng {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    SmallRng::from_seed(buf)
}

/// Builds the cards and starts every animation. Runs once, after the
/// shell below is in the document.
fn mount_animator() {
    let Some(stage) = WebStage::from_window() else {
        panic!("landing page mounted without a document");
    };
    let animator = PageAnimator::new(stage, TimeoutScheduler, AnimatorConfig::default());
    match animator.mount(&mut fresh_rng()) {
        Ok(mounted) => {
            info!(cards = mounted.cards.len(), shapes = mounted.shapes.len(), "landing page animated");
        }
        Err(err) => {
            error!("landing page animation failed to start: {err}");
            panic!("landing page animation failed to start: {err}");
        }
    }
}

#[component]
pub fn Landing() -> Element {
    use_effect(mount_animator);

    rsx! {
        style { "{PAGE_CSS}" }

        header {
            class: "page-header",
            svg {
                class: "geometric-svg",
                view_box: "0 0 100 100",
                preserve_aspect_ratio: "none",
            }
            // Regions start hidden so nothing flashes before the fade
            div {
                class: "header-content",
                style: "opacity: 0;",
                h1 { "Computational Geometry" }
                p { "Interactive walkthroughs of the classic algorithms for points, polygons and partitions." }
            }
        }

        main {
            class: "page-main",
            section {
                class: "about-section",
                style: "opacity: 0;",
                h2 { "About" }
                p { "Each topic below opens a visual, step-by-step explanation. Pick one to see how hulls are wrapped, space is split and planes are partitioned." }
            }
            div { class: "algorithms-grid" }
        }

        footer {
            style: "opacity: 0;",
            p { "Computational geometry, animated" }
        }
    }
}
