//! HTML report generator.
//!
//! Produces one self-contained page: a searchable, sortable movie table and
//! an expandable list of shows, each holding its seasons and episodes.

use crate::core::resolver::episode_display;
use crate::models::history::{History, Season, Show};
use crate::utils::text::escape_html;

/// Page title.
const PAGE_TITLE: &str = "Netflix Viewing History";

const STYLE: &str = r#"
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; padding: 20px; max-width: 1000px; margin: 0 auto; background-color: #fcfcfc; color: #333; }
    h1 { color: #e50914; border-bottom: 2px solid #eee; padding-bottom: 10px; }
    input.search { width: 100%; padding: 12px; font-size: 16px; margin-bottom: 20px; border: 1px solid #ddd; border-radius: 4px; box-sizing: border-box; }
    .sort-controls { margin-bottom: 15px; }
    .sort-btn { background: #eee; border: none; padding: 8px 12px; border-radius: 4px; cursor: pointer; font-size: 0.9em; margin-right: 5px; }
    .sort-btn:hover { background: #ddd; }
    .sort-btn.active { background: #e50914; color: white; }
    table { width: 100%; border-collapse: collapse; background: white; margin-bottom: 10px; font-size: 0.95em; border: 1px solid #eee; }
    th { background: #f4f4f4; text-align: left; padding: 10px; border-bottom: 2px solid #ddd; cursor: pointer; user-select: none; }
    th:hover { background: #e0e0e0; }
    td { border-bottom: 1px solid #eee; padding: 10px; vertical-align: top; }
    tr:hover { background: #fafafa; }
    th.sort-asc::after { content: " \25B2"; font-size: 0.8em; }
    th.sort-desc::after { content: " \25BC"; font-size: 0.8em; }
    details { background: white; border: 1px solid #e0e0e0; border-radius: 4px; margin-bottom: 5px; }
    summary { padding: 12px; cursor: pointer; font-weight: 600; list-style: none; position: relative; }
    summary:hover { background: #f8f8f8; }
    summary::-webkit-details-marker { display: none; }
    summary:after { content: "+"; position: absolute; right: 15px; color: #999; font-weight: bold; }
    details[open] > summary:after { content: "-"; }
    .season-details { margin: 10px 10px 10px 20px; border-left: 3px solid #e50914; }
    .season-summary { font-size: 0.95em; color: #555; }
    .count { color: #888; font-size: 0.8em; font-weight: normal; margin-left: 5px; }
"#;

const SCRIPT: &str = r#"
    function filterList() {
        var filter = document.getElementById("search").value.toUpperCase();
        document.querySelectorAll(".item-row").forEach(function (item) {
            var txt = item.textContent || item.innerText;
            item.style.display = txt.toUpperCase().indexOf(filter) > -1 ? "" : "none";
        });
    }

    function sortTable(tableId, colIndex, type) {
        var table = document.getElementById(tableId);
        var tbody = table.querySelector("tbody");
        var rows = Array.from(tbody.querySelectorAll("tr"));
        var th = table.querySelectorAll("th")[colIndex];
        var order = th.classList.contains("sort-asc") ? "desc" : "asc";

        table.querySelectorAll("th").forEach(function (h) { h.classList.remove("sort-asc", "sort-desc"); });
        th.classList.add(order === "asc" ? "sort-asc" : "sort-desc");

        rows.sort(function (a, b) {
            var valA = a.children[colIndex].getAttribute("data-sort");
            var valB = b.children[colIndex].getAttribute("data-sort");
            if (type === "num") {
                return order === "asc" ? valA - valB : valB - valA;
            }
            return order === "asc" ? valA.localeCompare(valB) : valB.localeCompare(valA);
        });

        rows.forEach(function (row) { tbody.appendChild(row); });
    }

    function sortSeries(button, criteria) {
        var container = document.getElementById("series-container");
        var items = Array.from(container.children);

        document.querySelectorAll(".series-sort-btn").forEach(function (btn) { btn.classList.remove("active"); });
        button.classList.add("active");

        items.sort(function (a, b) {
            var valA = a.getAttribute(criteria);
            var valB = b.getAttribute(criteria);
            if (criteria === "data-date") {
                return valB - valA;
            }
            return valA.localeCompare(valB);
        });

        items.forEach(function (item) { container.appendChild(item); });
    }
"#;

/// Render the full report.
pub fn render_report(history: &History) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
<script>{SCRIPT}</script>
</head>
<body>
<h1>{title}</h1>
<input type="text" id="search" class="search" onkeyup="filterList()" placeholder="Search titles...">
"#,
        title = PAGE_TITLE,
    ));

    render_movies(&mut html, history);
    render_series(&mut html, history);

    html.push_str("</body>\n</html>\n");
    html
}

fn render_movies(html: &mut String, history: &History) {
    html.push_str(&format!(
        r#"
<h2>Movies <span class="count">({count})</span></h2>
<p style="font-size:0.9em; color:#666;">Click headers to sort.</p>
<table id="movieTable">
  <thead>
    <tr>
      <th onclick="sortTable('movieTable', 0, 'str')">Title</th>
      <th onclick="sortTable('movieTable', 1, 'num')">Last Watched</th>
    </tr>
  </thead>
  <tbody>
"#,
        count = history.movies.len(),
    ));

    for (title, dates) in history.sorted_movies() {
        let escaped = escape_html(title);
        html.push_str(&format!(
            "    <tr class=\"item-row\"><td data-sort=\"{key}\">{escaped}</td><td data-sort=\"{ts}\">{dates}</td></tr>\n",
            key = escaped.to_lowercase(),
            escaped = escaped,
            ts = dates.latest_timestamp(),
            dates = escape_html(&dates.joined()),
        ));
    }

    html.push_str("  </tbody>\n</table>\n");
}

fn render_series(html: &mut String, history: &History) {
    html.push_str(&format!(
        r#"
<h2>Series <span class="count">({count})</span></h2>
<div class="sort-controls">
  <button class="sort-btn series-sort-btn active" onclick="sortSeries(this, 'data-name')">Name (A-Z)</button>
  <button class="sort-btn series-sort-btn" onclick="sortSeries(this, 'data-date')">Last Watched (Newest)</button>
</div>
<div id="series-container">
"#,
        count = history.series.len(),
    ));

    for (name, show) in history.sorted_shows() {
        render_show(html, name, show);
    }

    html.push_str("</div>\n");
}

fn render_show(html: &mut String, name: &str, show: &Show) {
    let escaped = escape_html(name);
    html.push_str(&format!(
        r#"<details class="item-row" data-name="{key}" data-date="{ts}">
  <summary>{escaped} <span class="count">({eps} unique eps)</span></summary>
  <div style="padding: 5px;">
"#,
        key = escaped.to_lowercase(),
        ts = show.latest_timestamp(),
        eps = show.unique_episodes(),
    ));

    for (label, season) in show.sorted_seasons() {
        render_season(html, name, label, season);
    }

    html.push_str("  </div>\n</details>\n");
}

fn render_season(html: &mut String, show: &str, label: &str, season: &Season) {
    html.push_str(&format!(
        r#"    <details class="season-details">
      <summary class="season-summary">{label} <span class="count">({count})</span></summary>
      <table>
        <thead><tr><th>Episode</th><th>Dates Watched</th></tr></thead>
        <tbody>
"#,
        label = escape_html(label),
        count = season.len(),
    ));

    for (title, dates) in &season.episodes {
        html.push_str(&format!(
            "          <tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&episode_display(show, label, title)),
            escape_html(&dates.joined()),
        ));
    }

    html.push_str("        </tbody>\n      </table>\n    </details>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_titles() {
        let mut history = History::default();
        history.movie_mut("Tom & Jerry <Live>").push("1/1/20");
        let html = render_report(&history);
        assert!(html.contains("Tom &amp; Jerry &lt;Live&gt;"));
        assert!(!html.contains("<Live>"));
    }

    #[test]
    fn test_movie_row_markup() {
        let mut history = History::default();
        history.movie_mut("Heat").push("1/1/20");
        history.movie_mut("Heat").push("bad");
        let html = render_report(&history);
        assert!(html.contains(
            "    <tr class=\"item-row\"><td data-sort=\"heat\">Heat</td><td data-sort=\"1577836800\">1/1/20, bad</td></tr>\n"
        ));
    }
}
