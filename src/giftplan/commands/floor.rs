use crate::assets::AssetUrls;
use crate::commands::helpers::{gift_entries, open_session};
use crate::commands::{CmdResult, PageView};
use crate::error::{GiftPlanError, Result};
use crate::plan::Page;
use crate::store::ProgressStore;

/// Shows one page: the starting gifts, or a floor with its pack, target
/// gifts, synthesis gifts and memo.
pub fn run<S: ProgressStore>(store: &S, page: Page, assets: &AssetUrls) -> Result<CmdResult> {
    let session = open_session(store)?;
    let plan = session.plan();
    let total_floors = plan.floors().len();

    let view = match page {
        Page::Starting => PageView {
            page,
            floor_number: None,
            pack_name: None,
            pack_image_url: None,
            targets: gift_entries(&session, plan.starting_gifts()),
            synthesis: Vec::new(),
            memo: None,
            total_floors,
        },
        Page::Floor(index) => {
            let floor = plan.floor(page).ok_or_else(|| {
                GiftPlanError::Api(format!(
                    "Floor {} does not exist (plan has {} floors)",
                    index + 1,
                    total_floors
                ))
            })?;
            PageView {
                page,
                floor_number: Some(floor.number),
                pack_name: floor.pack_name.clone().filter(|n| !n.is_empty()),
                pack_image_url: floor
                    .pack_image
                    .as_deref()
                    .and_then(|image| assets.pack_image(image)),
                targets: gift_entries(&session, &floor.gifts),
                synthesis: gift_entries(&session, &floor.synthesis_gifts),
                memo: floor.memo.clone().filter(|m| !m.is_empty()),
                total_floors,
            }
        }
    };

    Ok(CmdResult::default().with_page(view))
}
