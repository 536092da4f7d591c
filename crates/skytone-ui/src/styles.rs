//! Stylesheet for the cloud background and toggle controls.
//!
//! The fade-out keyframes read their duration from the `--skytone-fade`
//! custom property that [`ThemeProvider`](crate::ThemeProvider) sets from
//! its config, falling back to the duration baked in here.

use std::time::Duration;

use skytone_core::{ColorTable, Theme, FADE_OUT_DURATION};

/// CSS custom property carrying the fade-out duration.
pub const FADE_VAR: &str = "--skytone-fade";

/// Stylesheet with the default fade-out duration.
pub fn stylesheet() -> String {
    animations_css(FADE_OUT_DURATION)
}

/// Stylesheet whose fallback fade-out duration is `fade`.
pub fn animations_css(fade: Duration) -> String {
    let fade_ms = fade.as_millis();
    let palette = ColorTable::builtin();

    let mut css = format!(
        r#"
@keyframes fadeout {{
  from {{ opacity: 1; }}
  to {{ opacity: 0; }}
}}

.animate-fadeout {{
  animation: fadeout var({FADE_VAR}, {fade_ms}ms) ease-out forwards;
}}

@keyframes marqueeRightToLeft {{
  from {{ transform: translateX(100vw); }}
  to {{ transform: translateX(-100%); }}
}}

@keyframes marqueeLeftToRight {{
  from {{ transform: translateX(-100%); }}
  to {{ transform: translateX(100vw); }}
}}

.cloud-container {{
  position: absolute;
  left: 0;
  will-change: transform;
}}

.cloud-container.x1 {{ top: 4%; }}
.cloud-container.x2 {{ top: 18%; }}
.cloud-container.x3 {{ top: 34%; }}
.cloud-container.x4 {{ top: 52%; }}
.cloud-container.x5 {{ top: 70%; }}

.cloud-img {{
  display: block;
  max-width: 40vw;
  opacity: 0.9;
}}

.theme-toggle-btn {{
  background: transparent;
  border: none;
  cursor: pointer;
  padding: 0.5rem;
}}

.theme-toggle-icon-container {{
  display: flex;
  align-items: center;
  justify-content: center;
  transition: transform 300ms ease;
}}

.theme-toggle-btn:hover .theme-toggle-icon-container {{
  transform: rotate(20deg);
}}

.cloud-toggle-wrap {{
  position: relative;
  display: inline-block;
}}

.cloud-icon-off {{
  text-decoration: line-through;
  opacity: 0.6;
}}

.cloud-toggle-tooltip {{
  position: absolute;
  top: calc(100% + 0.4rem);
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  padding: 0.25rem 0.5rem;
  border-radius: 0.375rem;
  font-size: 0.75rem;
  pointer-events: none;
}}
"#
    );

    for theme in Theme::all() {
        let colors = palette.for_theme(*theme);
        css.push_str(&format!(
            ".skytone-root.{name} {{ --skytone-sky: {sky}; --skytone-sky-clouds: {clouds}; }}\n",
            name = theme.as_str(),
            sky = colors.default,
            clouds = colors.clouds,
        ));
    }

    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_duration_follows_config() {
        let css = animations_css(Duration::from_millis(640));
        assert!(css.contains("var(--skytone-fade, 640ms)"));
        assert!(stylesheet().contains(&format!("{}ms", FADE_OUT_DURATION.as_millis())));
    }

    #[test]
    fn test_marquee_keyframes_present() {
        let css = stylesheet();
        assert!(css.contains("@keyframes marqueeRightToLeft"));
        assert!(css.contains("@keyframes marqueeLeftToRight"));
        assert!(css.contains(".skytone-root.dusk"));
    }
}
