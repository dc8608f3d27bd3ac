use crate::commands::{GiftEntry, PlanSummary};
use crate::error::{GiftPlanError, Result};
use crate::model::Gift;
use crate::session::PlanSession;
use crate::store::ProgressStore;

/// Rebuilds the session for the most recently loaded plan.
pub fn open_session<S: ProgressStore>(store: &S) -> Result<PlanSession> {
    let doc = store.load_current_plan()?.ok_or(GiftPlanError::NoPlan)?;
    Ok(PlanSession::load(doc, store))
}

pub fn gift_entry(session: &PlanSession, gift: &Gift) -> GiftEntry {
    let id = session.plan().order_entry_id(gift);
    let state = session.state();
    GiftEntry {
        gift: gift.clone(),
        acquired: id.is_some_and(|id| state.is_acquired(id)),
        manual: id.is_some_and(|id| state.is_manual(id)),
        synthesis: id.is_some_and(|id| session.plan().is_synthesis(id)),
    }
}

pub fn gift_entries<'a, I>(session: &PlanSession, gifts: I) -> Vec<GiftEntry>
where
    I: IntoIterator<Item = &'a Gift>,
{
    gifts.into_iter().map(|g| gift_entry(session, g)).collect()
}

pub fn summary<S: ProgressStore>(session: &PlanSession, store: &S) -> PlanSummary {
    let plan = session.plan();
    let saved_at = match store.load_snapshot(plan.key()) {
        Ok(snapshot) => snapshot.and_then(|s| s.saved_at),
        Err(e) => {
            log::warn!("could not read progress for {}: {}", plan.key(), e);
            None
        }
    };
    PlanSummary {
        name: plan.name().map(str::to_string),
        difficulty: plan.difficulty().to_string(),
        description: plan.description().map(str::to_string),
        key: plan.key().clone(),
        floors: plan.floors().len(),
        progress: session.state().progress(plan),
        saved_at,
    }
}
