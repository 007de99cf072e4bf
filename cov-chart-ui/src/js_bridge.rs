//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The chart renderers live in `assets/js/*.js` and are evaluated as globals
//! (no ES modules). The time-series chart is drawn with D3; the pre-rendered
//! map figures are handed to Plotly unmodified.

use wasm_bindgen::JsValue;

// Embed the chart JS files at compile time
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static STATIC_FIGURE_JS: &str = include_str!("../assets/js/static-figure.js");

/// Poll interval and attempt cap for the wait loops: about ten seconds.
const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 100;

/// Quote a payload as a JS string literal.
///
/// JSON string syntax is valid JS, so this escapes quotes, backslashes and
/// newlines correctly.
fn js_string(payload: &str) -> String {
    serde_json::to_string(payload).unwrap_or_else(|_| "\"\"".to_string())
}

fn eval(code: &str) {
    let result: Result<JsValue, JsValue> = js_sys::eval(code);
    if let Err(e) = result {
        web_sys::console::warn_1(&e);
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('COV JS call failed:', e); }}",
        code
    );
    eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define their render functions via `function`
/// declarations. They are evaluated at global scope via indirect eval once
/// D3 is ready, then promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [MULTI_LINE_CHART_JS, STATIC_FIGURE_JS].join("\n");
    eval(&format!("window.__covChartScripts = {};", js_string(&all_js)));

    let init_js = format!(
        r#"
        (function() {{
            if (window.__covChartsReady || window.__covChartsPending) {{ return; }}
            window.__covChartsPending = true;
            var polls = 0;
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__covChartScripts);
                    delete window.__covChartScripts;
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof renderStaticFigure !== 'undefined') window.renderStaticFigure = renderStaticFigure;
                    window.__covChartsReady = true;
                    console.log('COV charts initialized');
                }} else if (++polls >= {MAX_POLLS}) {{
                    clearInterval(waitForD3);
                    window.__covChartsPending = false;
                    console.warn('[COV] d3 did not load; charts disabled');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#,
    );
    eval(&init_js);
}

/// Script that polls until the chart scripts, `ready_check` and the
/// container exist, then runs `call`. Gives up after `MAX_POLLS` attempts.
fn ready_poll_script(container_id: &str, ready_check: &str, call: &str) -> String {
    format!(
        r#"
        (function() {{
            var polls = 0;
            var poll = setInterval(function() {{
                if (window.__covChartsReady &&
                    {ready_check} &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        {call};
                    }} catch(e) {{ console.error('[COV] render error:', e); }}
                }} else if (++polls >= {MAX_POLLS}) {{
                    clearInterval(poll);
                    console.warn('[COV] gave up rendering #{container_id}: renderer not ready');
                }}
            }}, {POLL_INTERVAL_MS});
        }})();
        "#,
    )
}

fn render_when_ready(container_id: &str, ready_check: &str, call: &str) {
    call_js(&ready_poll_script(container_id, ready_check, call));
}

/// Render the time-series multi-line chart.
///
/// `data_json` is an array of `{series, date, value}`; `config_json` carries
/// the title, axis labels and legend order.
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let call = format!(
        "window.renderMultiLineChart('{}', {}, {})",
        container_id,
        js_string(data_json),
        js_string(config_json)
    );
    render_when_ready(
        container_id,
        "typeof window.renderMultiLineChart !== 'undefined'",
        &call,
    );
}

/// Render a pre-built Plotly figure without modification.
pub fn render_static_figure(container_id: &str, figure_json: &str) {
    let call = format!(
        "window.renderStaticFigure('{}', {})",
        container_id,
        js_string(figure_json)
    );
    render_when_ready(
        container_id,
        "typeof window.renderStaticFigure !== 'undefined' && typeof Plotly !== 'undefined'",
        &call,
    );
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById('{}'); if (el) el.innerHTML = '';",
        container_id
    ));
}
