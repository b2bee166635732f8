pub const CHECK_LOADING: &str = r#"
() => ({
    readyState: document.readyState,
    loading: document.readyState !== 'complete',
    activeRequests: performance.getEntriesByType('resource').filter(r => !r.responseEnd).length
})
"#;

/// The settings panel is usable once any root exposes a `<label>`.
/// Requires the helpers to be installed first.
pub const PANEL_READY: &str = r#"
() => {
    const ctx = window.__checkset;
    if (!ctx) return false;
    if (ctx.queryAllDeep(document, "label").length > 0) return true;
    return ctx.frameDocuments().some((f) => ctx.queryAllDeep(f.doc, "label").length > 0);
}
"#;
