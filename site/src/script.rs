//! Inline reveal script.
//!
//! Containers render with `data-motion-state="hidden"`; this script flips
//! them to `visible` when enough of them scrolls into view. All timing lives
//! in the stylesheet, the script only decides *when*.

use crate::motion::Viewport;

const REVEAL_SCRIPT_TEMPLATE: &str = r#"
(() => {
  const opts = __VIEWPORT__;
  const containers = document.querySelectorAll('[data-motion="container"]');
  const setState = (el, state) => el.setAttribute('data-motion-state', state);

  if (!('IntersectionObserver' in window)) {
    containers.forEach(el => setState(el, 'visible'));
    return;
  }

  const observer = new IntersectionObserver((entries) => {
    entries.forEach(entry => {
      if (entry.isIntersecting && entry.intersectionRatio >= opts.amount) {
        setState(entry.target, 'visible');
        if (opts.once) {
          observer.unobserve(entry.target);
        }
      } else if (!opts.once) {
        setState(entry.target, 'hidden');
      }
    });
  }, { threshold: opts.amount });

  containers.forEach(el => observer.observe(el));
})();
"#;

/// Script revealing `[data-motion="container"]` elements per `viewport`.
pub fn reveal_script(viewport: &Viewport) -> String {
    // Viewport only holds a bool and a float; serialization cannot fail.
    let opts = serde_json::to_string(viewport).unwrap_or_else(|_| "{}".to_string());
    REVEAL_SCRIPT_TEMPLATE.replace("__VIEWPORT__", &opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::IN_VIEW;

    #[test]
    fn embeds_viewport_options() {
        let script = reveal_script(&IN_VIEW);
        assert!(script.contains(r#"const opts = {"once":true,"amount":0.3};"#));
        assert!(script.contains("threshold: opts.amount"));
        assert!(!script.contains("__VIEWPORT__"));
    }

    #[test]
    fn once_unobserves_after_reveal() {
        let script = reveal_script(&IN_VIEW);
        assert!(script.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn falls_back_without_observer_support() {
        let script = reveal_script(&Viewport {
            once: false,
            amount: 0.5,
        });
        assert!(script.contains("'IntersectionObserver' in window"));
        assert!(script.contains(r#""amount":0.5"#));
    }
}
