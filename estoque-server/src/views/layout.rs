//! Page shell: head, navigation, flash stack

use super::escape_html;
use crate::flash::{FLASH_TTL_MS, Flash};
use crate::routing::Route;

/// Wrap a page body in the full document
pub fn page(route: &Route, flashes: &[Flash], body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8" />
<meta name="viewport" content="width=device-width, initial-scale=1" />
<title>{title} · Estoque</title>
<style>{css}</style>
</head>
<body>
<header class="topbar">
  <a class="brand" href="/">📦 Estoque</a>
  <nav id="nav">{nav}</nav>
</header>
<div id="flashStack" class="flash-stack">{flashes}</div>
<main id="app" class="container">
{body}
</main>
</body>
</html>
"#,
        title = escape_html(route.label()),
        css = stylesheet(),
        nav = nav(route),
        flashes = flash_stack(flashes),
    )
}

fn nav(active: &Route) -> String {
    Route::NAV
        .iter()
        .map(|route| {
            let class = if route == active { r#" class="active""# } else { "" };
            format!(r#"<a{class} href="{}">{}</a>"#, route.path(), route.label())
        })
        .collect()
}

fn flash_stack(flashes: &[Flash]) -> String {
    flashes
        .iter()
        .map(|flash| {
            format!(
                r#"<div class="flash {}">{}</div>"#,
                flash.kind.as_str(),
                escape_html(&flash.message)
            )
        })
        .collect()
}

fn stylesheet() -> String {
    format!(
        r#"
:root {{ --bg:#0f172a; --card:#111827; --text:#e5e7eb; --muted:#9ca3af; --accent:#22c55e; --danger:#ef4444; --border:#1f2937; }}
* {{ box-sizing:border-box; }}
body {{ margin:0; font-family:system-ui,sans-serif; background:var(--bg); color:var(--text); }}
a {{ color:inherit; }}
.topbar {{ display:flex; align-items:center; justify-content:space-between; gap:16px; padding:14px 24px; border-bottom:1px solid var(--border); flex-wrap:wrap; }}
.brand {{ font-weight:700; text-decoration:none; }}
#nav {{ display:flex; gap:6px; flex-wrap:wrap; }}
#nav a {{ padding:6px 10px; border-radius:8px; text-decoration:none; color:var(--muted); }}
#nav a.active {{ background:var(--card); color:var(--text); }}
.container {{ max-width:1000px; margin:0 auto; padding:24px; }}
.page-header h1 {{ margin:0 0 4px; }}
.muted {{ color:var(--muted); }}
.small {{ font-size:.875rem; }}
.mt {{ margin-top:16px; }}
.mt-sm {{ margin-top:8px; }}
.grid {{ display:grid; grid-template-columns:repeat(auto-fit,minmax(200px,1fr)); gap:12px; }}
.card {{ background:var(--card); border:1px solid var(--border); border-radius:12px; padding:16px; }}
.card-head {{ display:flex; justify-content:space-between; align-items:center; }}
.card-label {{ color:var(--muted); font-size:.875rem; }}
.card-value {{ font-size:1.5rem; font-weight:700; margin-top:6px; }}
.table-wrap {{ overflow-x:auto; }}
.table {{ width:100%; border-collapse:collapse; }}
.table th, .table td {{ text-align:left; padding:8px; border-bottom:1px solid var(--border); }}
tr.low-stock td {{ background:rgba(239,68,68,.08); }}
.pill {{ display:inline-block; min-width:2em; text-align:center; padding:2px 8px; border-radius:999px; }}
.pill-ok {{ background:rgba(34,197,94,.15); color:var(--accent); }}
.pill-danger {{ background:rgba(239,68,68,.15); color:var(--danger); }}
.actions {{ display:flex; justify-content:space-between; align-items:center; gap:10px; flex-wrap:wrap; margin-bottom:12px; }}
.btn {{ display:inline-block; padding:8px 14px; border-radius:8px; border:0; background:var(--accent); color:#052e16; font-weight:600; text-decoration:none; cursor:pointer; font-size:1rem; }}
.btn-secondary {{ background:var(--border); color:var(--text); }}
.btn-danger {{ background:var(--danger); color:#fff; }}
.form {{ display:flex; flex-direction:column; gap:12px; }}
.form-grid {{ display:grid; grid-template-columns:repeat(auto-fit,minmax(200px,1fr)); gap:12px; }}
.form-row {{ display:flex; flex-direction:column; gap:4px; }}
.form-row input, .form-row select {{ padding:8px; border-radius:8px; border:1px solid var(--border); background:var(--bg); color:var(--text); }}
.form-actions {{ display:flex; gap:10px; }}
.sep {{ border:0; border-top:1px solid var(--border); margin:16px 0; }}
.result-grid {{ display:grid; grid-template-columns:repeat(auto-fit,minmax(140px,1fr)); gap:12px; }}
.confirm {{ border-color:var(--danger); }}
.report-value {{ font-size:2rem; font-weight:700; }}
.kbd {{ border:1px solid var(--border); border-radius:4px; padding:0 4px; }}
.flash-stack {{ position:fixed; top:16px; right:16px; display:flex; flex-direction:column; gap:8px; z-index:10; }}
.flash {{ padding:10px 14px; border-radius:8px; animation:flash-out 200ms ease {ttl}ms forwards; }}
.flash.success {{ background:#14532d; }}
.flash.error {{ background:#7f1d1d; }}
@keyframes flash-out {{ to {{ opacity:0; transform:translateY(-4px); visibility:hidden; }} }}
"#,
        ttl = FLASH_TTL_MS
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_marks_only_active_route() {
        let html = nav(&Route::Sell);
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains(r#"<a class="active" href="/vender">Vender</a>"#));
    }

    #[test]
    fn test_flash_fades_after_ttl() {
        assert!(stylesheet().contains("200ms ease 3500ms forwards"));
    }
}
