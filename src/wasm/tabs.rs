//! Tabbed content: exactly one `data-tab` id active at a time, with the
//! button ↔ panel pairing given by the `tab-<id>` naming convention.

use std::rc::Rc;

use wasm_bindgen::JsValue;

use super::app::Ctx;
use super::dom;
use super::observe::SkillBars;

/// Delay before the skill bars start after switching to their tab, so the
/// panel transition has begun.
const SKILLS_DELAY_MS: i32 = 100;

pub(crate) fn init(ctx: &Ctx, skills: &Rc<SkillBars>) -> Result<(), JsValue> {
    let buttons = dom::query_all(&ctx.document, ".tab-btn");
    if buttons.is_empty() {
        return Ok(());
    }
    let panels = dom::query_all(&ctx.document, ".tab-content");

    let buttons = Rc::new(buttons);
    let panels = Rc::new(panels);

    for button in buttons.iter() {
        let ctx = ctx.clone();
        let buttons = Rc::clone(&buttons);
        let panels = Rc::clone(&panels);
        let skills = Rc::clone(skills);
        let button2 = button.clone();
        dom::listen(button, "click", move || {
            let Some(tab_id) = button2.get_attribute("data-tab") else {
                return;
            };
            ctx.state.borrow_mut().active_tab = tab_id.clone();

            for btn in buttons.iter() {
                let active = btn.get_attribute("data-tab").as_deref() == Some(&tab_id);
                dom::toggle_class(btn, "active", active);
            }
            let panel_id = format!("tab-{tab_id}");
            for panel in panels.iter() {
                dom::toggle_class(panel, "active", panel.id() == panel_id);
            }

            if tab_id == "skills" {
                let skills = Rc::clone(&skills);
                dom::after(&ctx.window, SKILLS_DELAY_MS, move || skills.animate());
            }
        });
    }

    Ok(())
}
