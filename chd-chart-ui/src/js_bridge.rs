//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions live in `assets/js/*.js` and are loaded at runtime.
//! They are evaluated as globals (no ES modules) and exposed via `window.*`.
//! This module serializes chart specifications and calls those globals.

use chd_charts::{ChartSpec, HistogramChart, ScatterChart};

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static HISTOGRAM_CHART_JS: &str = include_str!("../assets/js/histogram-chart.js");

/// Globals the chart scripts define, promoted to `window` once evaluated.
const CHART_GLOBALS: [&str; 6] = [
    "renderScatterChart",
    "renderHistogramChart",
    "clearChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('CHD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart scripts are stored on `window` and evaluated at global scope via
/// indirect eval once D3 is ready, then each function is promoted to
/// `window.*` explicitly. Safe to call more than once.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, SCATTER_CHART_JS, HISTOGRAM_CHART_JS].join("\n");

    let store_js = match serde_json::to_string(&all_js) {
        Ok(literal) => format!("window.__chdChartScripts = {};", literal),
        Err(e) => {
            log::error!("js_bridge: failed to encode chart scripts: {}", e);
            return;
        }
    };
    call_js(&store_js);

    let promote: String = CHART_GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            if (window.__chdChartsReady || window.__chdChartsPending) return;
            window.__chdChartsPending = true;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__chdChartScripts);
                    delete window.__chdChartScripts;
                    {promote}
                    window.__chdChartsReady = true;
                    console.log('CHD charts initialized');
                }}
            }}, 100);
        }})();
        "#,
    );
    call_js(&init_js);
}

/// Poll until D3, the chart scripts and the container all exist, then call
/// `window.<renderer>(containerId, dataJson, configJson)`.
fn render_when_ready(renderer: &str, container_id: &str, data_json: &str, config_json: &str) {
    // JSON-encode the payloads again so they arrive as JS string literals
    let (data_literal, config_literal) =
        match (serde_json::to_string(data_json), serde_json::to_string(config_json)) {
            (Ok(d), Ok(c)) => (d, c),
            (Err(e), _) | (_, Err(e)) => {
                log::error!("js_bridge: failed to encode {} payload: {}", renderer, e);
                return;
            }
        };

    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__chdChartsReady &&
                    typeof window.{renderer} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{renderer}('{container_id}', {data_literal}, {config_literal});
                    }} catch(e) {{ console.error('[CHD] {renderer} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Serialize a chart and hand it to the named renderer.
fn render_spec<S: ChartSpec>(renderer: &str, container_id: &str, chart: &S) -> bool {
    let data_json = match chart.data_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("js_bridge: failed to serialize {} data: {}", renderer, e);
            return false;
        }
    };
    let config_json = match chart.config_json() {
        Ok(json) => json,
        Err(e) => {
            log::error!("js_bridge: failed to serialize {} config: {}", renderer, e);
            return false;
        }
    };
    render_when_ready(renderer, container_id, &data_json, &config_json);
    true
}

/// Render the scatter plot into `container_id`, replacing any previous chart.
///
/// Returns `false` if the chart could not be serialized.
pub fn render_scatter_chart(container_id: &str, chart: &ScatterChart) -> bool {
    render_spec("renderScatterChart", container_id, chart)
}

/// Render the histogram into `container_id`, replacing any previous chart.
///
/// Returns `false` if the chart could not be serialized.
pub fn render_histogram_chart(container_id: &str, chart: &HistogramChart) -> bool {
    render_spec("renderHistogramChart", container_id, chart)
}

