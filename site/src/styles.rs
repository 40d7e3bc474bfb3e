//! CSS styles for the landing page.
//!
//! Layout and theme live in [`LANDING_CSS`]; animation rules are generated
//! from the presets in [`crate::motion`] and appended by [`stylesheet`].
//!
//! # Features
//!
//! - Dark theme with a green accent
//! - Responsive grids: 1 → 2 → 4 feature columns, stacked → row steps
//! - System font stack, no external requests

/// Layout and theme CSS.
pub const LANDING_CSS: &str = r#"
:root {
    --gray-900: #111827;
    --gray-800: #1f2937;
    --gray-700: #374151;
    --gray-500: #6b7280;
    --gray-400: #9ca3af;
    --gray-300: #d1d5db;
    --gray-100: #f3f4f6;
    --green-400: #4ade80;
    --green-500: #22c55e;
    --green-600: #16a34a;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --page-max: 80rem;
    --radius: 0.5rem;
    --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.4), 0 4px 6px -4px rgba(0, 0, 0, 0.4);
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    background: var(--gray-900);
    color: var(--gray-100);
    font-family: var(--font-sans);
    line-height: 1.5;
}

img {
    max-width: 100%;
    height: auto;
    display: block;
}

a {
    color: inherit;
    text-decoration: none;
}

/* Header */
.site-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem 2rem;
    border-bottom: 1px solid var(--gray-700);
}

.site-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.site-nav {
    display: flex;
    gap: 1.5rem;
    color: var(--gray-300);
}

.site-nav a {
    transition: color 150ms ease;
}

.site-nav a:hover {
    color: var(--green-400);
}

/* Hero */
.hero {
    display: flex;
    flex-direction: column-reverse;
    align-items: center;
    justify-content: space-between;
    gap: 3rem;
    width: 100%;
    max-width: var(--page-max);
    margin: 0 auto;
    padding: 5rem 2rem;
}

.hero-copy {
    max-width: 36rem;
    text-align: center;
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: 3rem;
    font-weight: 800;
    line-height: 1.15;
}

.hero-body {
    margin: 0 0 2rem;
    color: var(--gray-400);
    font-size: 1.125rem;
}

.hero-preview {
    width: 100%;
    max-width: 32rem;
}

.hero-preview img,
.step-card img {
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}

.button {
    display: inline-block;
    font-weight: 600;
    border-radius: 0.25rem;
}

.button-primary {
    padding: 1rem 2rem;
    background: var(--green-500);
    color: #000;
    box-shadow: var(--shadow);
}

.button-primary:hover {
    background: var(--green-600);
}

.button-dark {
    padding: 1rem 2.5rem;
    background: #000;
    color: var(--green-500);
}

.button-dark:hover {
    background: var(--gray-900);
}

/* Sections */
.section {
    width: 100%;
    max-width: var(--page-max);
    margin: 0 auto;
    padding: 5rem 2rem;
}

.section-title {
    margin: 0 0 3rem;
    font-size: 2.25rem;
    font-weight: 700;
    text-align: center;
}

.features {
    background: var(--gray-800);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}

.feature-grid {
    display: grid;
    gap: 2.5rem;
}

.feature-card {
    padding: 1.5rem;
    background: var(--gray-700);
    border-radius: var(--radius);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.3);
}

.feature-card:hover {
    box-shadow: var(--shadow);
}

.feature-icon {
    margin-bottom: 1rem;
    color: var(--green-400);
}

.feature-icon svg {
    width: 3rem;
    height: 3rem;
}

.card-title {
    margin: 0 0 0.5rem;
    font-size: 1.25rem;
    font-weight: 600;
}

.card-description {
    margin: 0;
    color: var(--gray-400);
}

.step-row {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 3rem;
    max-width: 64rem;
    margin: 0 auto;
    text-align: center;
}

.step-card img {
    margin: 0 auto;
}

.step-card .card-title {
    margin-top: 1rem;
}

/* Download banner */
.cta {
    padding: 4rem 2rem;
    background: var(--green-600);
    color: #000;
    font-size: 1.25rem;
    font-weight: 600;
    text-align: center;
}

.cta-title {
    margin: 0 0 1rem;
    font-size: inherit;
}

/* Footer */
.site-footer {
    margin-top: auto;
    padding: 1.5rem 2rem;
    border-top: 1px solid var(--gray-700);
    color: var(--gray-500);
    font-size: 0.875rem;
    text-align: center;
}

@media (min-width: 640px) {
    .feature-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

@media (min-width: 768px) {
    .step-row {
        flex-direction: row;
        text-align: left;
    }

    .step-card {
        width: 33.333%;
    }

    .step-card img {
        margin: 0;
    }
}

@media (min-width: 1024px) {
    .hero {
        flex-direction: row;
    }

    .hero-copy {
        text-align: left;
    }

    .feature-grid {
        grid-template-columns: repeat(4, minmax(0, 1fr));
    }
}
"#;

/// Complete stylesheet: layout plus generated motion rules.
pub fn stylesheet() -> String {
    format!("{}\n{}", LANDING_CSS, crate::motion::stylesheet())
}
