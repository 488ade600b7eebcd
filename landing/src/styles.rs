//! CSS for the portfolio page.
//!
//! Dark theme by default; `body.light-mode` swaps the palette. Class names
//! here are the ones the components toggle (`active`, `is-hidden`,
//! `is-highlighted`, `is-visible`, `copied`).

/// Complete page stylesheet, injected once by `App`.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-color: #0d1117;
    --text-main: #c9d1d9;
    --text-heading: #f0f6fc;
    --text-dim: #8b949e;
    --accent: #58a6ff;
    --glass-bg: rgba(255, 255, 255, 0.04);
    --glass-border: rgba(255, 255, 255, 0.12);
    --font: "Inter", system-ui, sans-serif;
}

body.light-mode {
    --bg-color: #f6f8fa;
    --text-main: #24292f;
    --text-heading: #0d1117;
    --text-dim: #57606a;
    --accent: #0969da;
    --glass-bg: rgba(0, 0, 0, 0.03);
    --glass-border: rgba(0, 0, 0, 0.12);
}

* { box-sizing: border-box; }

html { scroll-behavior: auto; }

body {
    margin: 0;
    background: var(--bg-color);
    color: var(--text-main);
    font-family: var(--font);
    line-height: 1.6;
    transition: background 0.3s ease, color 0.3s ease;
}

.container { max-width: 960px; margin: 0 auto; padding: 0 24px; }

.glass {
    background: var(--glass-bg);
    border: 1px solid var(--glass-border);
    border-radius: 12px;
    transition: border-color 0.3s ease;
}

.is-highlighted { border-color: var(--text-main); }

/* Navigation */
.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 70px;
    z-index: 10;
    background: var(--bg-color);
    border-bottom: 1px solid var(--glass-border);
}
.nav-inner {
    max-width: 960px;
    height: 100%;
    margin: 0 auto;
    padding: 0 24px;
    display: flex;
    align-items: center;
    gap: 24px;
}
.nav-brand { color: var(--text-heading); font-weight: 700; text-decoration: none; }
.nav-links { display: flex; gap: 16px; list-style: none; margin: 0 0 0 auto; padding: 0; }
.nav-link { color: var(--text-dim); text-decoration: none; }
.nav-link.active { color: var(--accent); border-bottom: 2px solid var(--accent); }
.theme-toggle {
    background: none;
    border: 1px solid var(--glass-border);
    color: var(--text-main);
    border-radius: 6px;
    padding: 4px 12px;
    cursor: pointer;
}

main { padding-top: 94px; display: grid; gap: 24px; }
main > section { padding: 32px 0; }

/* Hero */
.hero-eyebrow { color: var(--accent); margin: 0; }
.hero-title { color: var(--text-heading); font-size: 2.5rem; margin: 8px 0; }
.hero-actions { display: flex; gap: 12px; margin-top: 24px; }
.btn {
    border-radius: 6px;
    padding: 8px 16px;
    border: 1px solid var(--glass-border);
    color: var(--text-heading);
    background: none;
    text-decoration: none;
    cursor: pointer;
}
.btn-primary { background: var(--accent); border-color: var(--accent); color: var(--bg-color); }
.copy-btn.copied { background: var(--text-heading); color: var(--bg-color); }

/* Skills */
.skills-list { display: flex; flex-wrap: wrap; gap: 8px; list-style: none; padding: 0; }
.skill { border: 1px solid var(--glass-border); border-radius: 999px; padding: 2px 12px; }

/* Projects */
.filter-bar { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
.filter-btn {
    background: none;
    border: 1px solid var(--glass-border);
    color: var(--text-main);
    border-radius: 6px;
    padding: 4px 12px;
    cursor: pointer;
}
.filter-btn.active { background: var(--accent); color: var(--bg-color); }
.add-btn { margin-left: auto; border-style: dashed; }
.projects-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; }
.project-card { padding: 16px; cursor: pointer; opacity: 1; visibility: visible; }
.project-card.is-hidden { opacity: 0; visibility: hidden; pointer-events: none; }
.project-card.is-collapsed { display: none; }
.project-card h3 { color: var(--text-heading); margin: 8px 0; }
.project-tag { font-size: 0.75rem; color: var(--accent); text-transform: uppercase; }

/* Contact */
.contact-form { display: grid; gap: 8px; max-width: 480px; }
.contact-form input,
.contact-form textarea {
    background: var(--glass-bg);
    border: 1px solid var(--glass-border);
    border-radius: 6px;
    color: var(--text-main);
    padding: 8px;
    font: inherit;
}
.success-msg { display: none; color: var(--accent); }
.success-msg.is-visible { display: block; animation: fade-in 0.3s ease; }

@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }

/* Activity log */
.activity {
    position: fixed;
    right: 16px;
    bottom: 16px;
    width: 320px;
    padding: 12px;
    background: var(--bg-color);
}
.activity-title { margin: 0 0 8px; font-size: 0.9rem; color: var(--text-heading); }
.log-container { max-height: 180px; overflow-y: auto; font-size: 0.8rem; }
#log-list { margin: 0; padding-left: 18px; }

/* Footer */
.footer { padding: 32px 0; color: var(--text-dim); text-align: center; }
"#;
