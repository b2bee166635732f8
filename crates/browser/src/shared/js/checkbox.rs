//! Per-checkbox primitives addressed through the registry installed by
//! [`super::page::INSTALL_HELPERS`]. A registry miss (element removed or
//! never parked) is reported in-band, never thrown.

/// Dispatch the synthetic event burst on a parked input ("input" surface)
/// or its ancestor label ("label" surface). Labels often host the
/// framework's actual click handler.
pub const FIRE_SEQUENCE: &str = r#"
(rootIndex, slot, surface) => {
    const ctx = window.__checkset;
    const input = ctx.lookup(rootIndex, slot);
    if (!input) return { outcome: "missing" };
    const el = surface === "label" ? input.closest("label") : input;
    if (!el) return { outcome: "no-surface" };
    ctx.fireAll(el);
    return { outcome: "fired" };
}
"#;

/// Read the live checked/aria state of a parked input.
pub const READ_STATE: &str = r#"
(rootIndex, slot) => {
    const input = window.__checkset.lookup(rootIndex, slot);
    if (!input) return null;
    return { checked: input.checked, aria: input.getAttribute("aria-checked") };
}
"#;

/// Forced write: invoke the platform `checked` setter from the element's
/// own realm so a framework-installed instance override cannot swallow the
/// assignment, mirror `aria-checked`, then fire plain `input`/`change` so
/// state listeners still observe the mutation.
pub const FORCE_CHECKED: &str = r#"
(rootIndex, slot, value) => {
    const input = window.__checkset.lookup(rootIndex, slot);
    if (!input) return { forced: false };
    const view = (input.ownerDocument && input.ownerDocument.defaultView) || window;
    const desc = Object.getOwnPropertyDescriptor(view.HTMLInputElement.prototype, "checked");
    if (desc && desc.set) desc.set.call(input, value); else input.checked = value;
    input.setAttribute("aria-checked", String(value));
    input.dispatchEvent(new Event("input", { bubbles: true }));
    input.dispatchEvent(new Event("change", { bubbles: true }));
    return { forced: true };
}
"#;
