//! Region fader - header, about and footer fade in once on load

use std::rc::Rc;

use super::reveal::Reveal;
use crate::config::RegionTiming;
use crate::error::{MountError, Role};
use crate::schedule::Scheduler;
use crate::stage::Stage;

/// Hide each region now, reveal it after its own delay
pub fn fade_in<S, T>(
    stage: &Rc<S>,
    scheduler: &T,
    regions: [(&S::Node, &RegionTiming, Role); 3],
) -> Result<(), MountError>
where
    S: Stage + 'static,
    T: Scheduler + ?Sized,
{
    for (node, timing, role) in regions {
        let reveal = Reveal::region(timing);
        reveal.hide(&**stage, node)?;
        reveal.schedule(stage, scheduler, node.clone(), role);
    }
    Ok(())
}
