//! Page-wide helpers installed once per page under `window.__checkset`:
//! deep query across open shadow roots, same-origin frame enumeration,
//! the synthetic event burst, and the element registry that lets separate
//! evaluate calls address the same input.

/// Idempotent installer. Closed shadow roots stay unreachable; traversal
/// is an explicit-stack DFS, so result order is unspecified and callers
/// must dedup. Cross-origin frames throw on `contentDocument` access and
/// are skipped.
pub const INSTALL_HELPERS: &str = r#"
() => {
    if (window.__checkset) return { installed: false };

    const isElem = (n) => n && n.nodeType === 1;

    const queryAllDeep = (root, selector) => {
        const out = [];
        const stack = [root];
        while (stack.length) {
            const node = stack.pop();
            if (!node) continue;
            if (node.querySelectorAll) out.push(...node.querySelectorAll(selector));
            if (isElem(node) && node.shadowRoot) stack.push(node.shadowRoot);
            if (node.childNodes) node.childNodes.forEach((c) => { if (isElem(c)) stack.push(c); });
        }
        return out;
    };

    const frameDocuments = () => {
        const frames = [];
        document.querySelectorAll("iframe").forEach((f, idx) => {
            try {
                if (f.contentDocument) {
                    frames.push({ doc: f.contentDocument, scope: "iframe#" + (f.id || idx) });
                }
            } catch (e) {
                // cross-origin: unreachable, skip
            }
        });
        return frames;
    };

    const resolveRoot = (index) => {
        if (index === 0) return document;
        const entry = frameDocuments()[index - 1];
        return entry ? entry.doc : null;
    };

    const fireAll = (el) => {
        ["pointerdown", "mousedown", "focus", "click", "mouseup", "pointerup", "input", "change"]
            .forEach((type) => el.dispatchEvent(new Event(type, { bubbles: true, cancelable: true })));
    };

    const registry = new Map();
    const park = (rootIndex, input) => {
        if (!registry.has(rootIndex)) registry.set(rootIndex, []);
        return registry.get(rootIndex).push(input) - 1;
    };
    const lookup = (rootIndex, slot) => {
        const slots = registry.get(rootIndex);
        const input = slots ? slots[slot] : null;
        return input && input.isConnected ? input : null;
    };

    window.__checkset = { queryAllDeep, frameDocuments, resolveRoot, fireAll, park, lookup };
    return { installed: true };
}
"#;

/// Enumerate traversal roots: the top document plus every same-origin
/// iframe document, in DOM order. Index 0 is always "top".
pub const LIST_ROOTS: &str = r#"
() => {
    const roots = [{ index: 0, scope: "top" }];
    window.__checkset.frameDocuments().forEach((f, i) => {
        roots.push({ index: i + 1, scope: f.scope });
    });
    return roots;
}
"#;

/// Collect unique matched checkboxes under one root.
///
/// A label matches when its lower-cased text contains any lower-cased
/// target name as a substring. The checkbox is resolved with a shallow
/// query first, then a deep query for shadow-nested inputs. Each picked
/// input is parked in the registry; the returned records carry the slot,
/// the (trimmed, capped) label text, and the state at collection time.
pub const COLLECT_TARGETS: &str = r#"
(rootIndex, names) => {
    const ctx = window.__checkset;
    const root = ctx.resolveRoot(rootIndex);
    if (!root) return [];

    const wanted = names.map((n) => n.toLowerCase());
    const selector = 'input[type="checkbox"][role="checkbox"]';
    const picked = [];
    for (const label of ctx.queryAllDeep(root, "label")) {
        const text = (label.textContent || "").toLowerCase();
        if (!wanted.some((n) => text.includes(n))) continue;
        const input = label.querySelector(selector) || ctx.queryAllDeep(label, selector)[0] || null;
        if (input && !picked.includes(input)) picked.push(input);
    }

    return picked.map((input) => {
        const label = input.closest("label");
        const name = ((label && label.textContent) || "").trim().slice(0, 50) || "(unnamed)";
        return {
            root_index: rootIndex,
            slot: ctx.park(rootIndex, input),
            name: name,
            checked: input.checked,
            aria: input.getAttribute("aria-checked"),
        };
    });
}
"#;
