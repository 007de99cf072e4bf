//! Pre-rendered figures (the state and county choropleth maps).
//!
//! These are Plotly figure JSON files produced offline. They are displayed
//! unmodified; parsing only checks that the payload is a figure object so a
//! broken asset is reported at startup rather than in the browser.

use serde_json::Value;

/// A figure loaded verbatim from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticFigure {
    pub name: String,
    figure: Value,
}

impl StaticFigure {
    /// Parse a figure, requiring a top-level object with a `data` array.
    pub fn parse(name: &str, raw: &str) -> anyhow::Result<Self> {
        let figure: Value = serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("{}: invalid figure JSON: {}", name, e))?;
        match figure.get("data") {
            Some(Value::Array(_)) => {}
            _ => anyhow::bail!("{}: figure has no 'data' array", name),
        }
        Ok(Self {
            name: name.to_string(),
            figure,
        })
    }

    /// Number of traces in the figure.
    pub fn trace_count(&self) -> usize {
        self.figure["data"].as_array().map_or(0, |a| a.len())
    }

    /// The figure re-serialized for the renderer.
    pub fn to_json(&self) -> String {
        self.figure.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plotly_figure() {
        let raw = r#"{"data":[{"type":"choropleth","locations":["CA"],"z":[1]}],"layout":{"title":{"text":"Cases"}}}"#;
        let fig = StaticFigure::parse("state_map", raw).unwrap();
        assert_eq!(fig.name, "state_map");
        assert_eq!(fig.trace_count(), 1);

        let round: Value = serde_json::from_str(&fig.to_json()).unwrap();
        assert_eq!(round["layout"]["title"]["text"], "Cases");
    }

    #[test]
    fn rejects_non_figures() {
        assert!(StaticFigure::parse("a", "not json").is_err());
        assert!(StaticFigure::parse("b", "[1,2,3]").is_err());
        let err = StaticFigure::parse("c", r#"{"layout":{}}"#).unwrap_err();
        assert!(err.to_string().contains("c: figure has no 'data' array"));
    }
}
