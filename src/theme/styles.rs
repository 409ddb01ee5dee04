//! Global CSS styles for Glowquiz.
//!
//! Studio aesthetic: deep plum backdrop, blush buttons, gold results.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PLUM (Backgrounds) */
  --plum-deep: #2f2963;
  --plum-panel: #3a3377;
  --plum-border: #4b4390;

  /* BLUSH (Buttons, primary accents) */
  --blush: #f2a6b8;
  --blush-glow: rgba(242, 166, 184, 0.35);

  /* GOLD (Highlights, results) */
  --gold: #e9c46a;
  --gold-glow: rgba(233, 196, 106, 0.3);

  /* TEXT */
  --text-primary: #f8f5ff;
  --text-secondary: rgba(248, 245, 255, 0.72);
  --text-muted: rgba(248, 245, 255, 0.5);

  /* SEMANTIC */
  --danger: #ff6b81;
  --success: #7bd389;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--plum-deep);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.quiz {
  max-width: 30rem;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 3rem;
  display: flex;
  flex-direction: column;
  align-items: stretch;
  gap: 1.75rem;
  text-align: center;
}

.quiz-header {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 500;
  color: var(--blush);
  text-shadow: 0 0 24px var(--blush-glow);
  letter-spacing: 0.04em;
}

.step-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--text-secondary);
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 20px var(--gold-glow);
}

/* === Step Progress === */
.step-progress {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
}

.step-dot {
  width: 0.6rem;
  height: 0.6rem;
  border-radius: 50%;
  background: var(--plum-border);
  transition: background var(--transition-normal);
}

.step-dot--done {
  background: var(--blush);
  box-shadow: 0 0 8px var(--blush-glow);
}

.step-progress__label {
  margin-left: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Step Card === */
.quiz-step {
  background: var(--plum-panel);
  border: 1px solid var(--plum-border);
  border-radius: 16px;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

/* === Option Buttons === */
.option-group {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
}

.option-btn {
  width: 100%;
  padding: 0.8rem 1rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  color: var(--text-primary);
  background: transparent;
  border: 1px solid var(--blush);
  border-radius: 10px;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.option-btn:hover {
  background: var(--blush);
  color: var(--plum-deep);
}

/* === Navigation / Submit === */
.btn-next,
.btn-submit {
  align-self: center;
  padding: 0.8rem 2rem;
  font-family: var(--font-sans);
  font-size: var(--text-base);
  font-weight: 600;
  border: none;
  border-radius: 10px;
  cursor: pointer;
  transition: filter var(--transition-fast);
}

.btn-next {
  background: var(--blush);
  color: var(--plum-deep);
}

.btn-submit {
  background: var(--gold);
  color: var(--plum-deep);
  box-shadow: 0 0 20px var(--gold-glow);
}

.btn-next:hover,
.btn-submit:hover {
  filter: brightness(1.08);
}

.btn-submit:disabled {
  filter: grayscale(0.5);
  cursor: wait;
}

/* === Photo Picker === */
.photo-picker {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.photo-picker-btn {
  padding: 0.7rem 1.5rem;
  font-size: var(--text-base);
  color: var(--text-primary);
  background: transparent;
  border: 1px dashed var(--blush);
  border-radius: 10px;
  cursor: pointer;
  transition: border-color var(--transition-fast);
}

.photo-picker-btn:hover {
  border-style: solid;
}

.photo-picker-btn:disabled {
  color: var(--text-muted);
  cursor: wait;
}

.photo-preview {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
}

.photo-preview__img {
  max-width: 12rem;
  max-height: 12rem;
  object-fit: cover;
  border-radius: 12px;
  border: 1px solid var(--plum-border);
}

.photo-preview__name {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.photo-picker__error {
  font-size: var(--text-sm);
  color: var(--danger);
}

/* === Notices === */
.quiz-notice {
  padding: 0.75rem 1rem;
  background: rgba(255, 107, 129, 0.12);
  border: 1px solid var(--danger);
  border-radius: 10px;
  color: var(--danger);
  font-size: var(--text-sm);
}

/* === Results === */
.tone-line {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--text-secondary);
}

.tone-value {
  color: var(--gold);
  text-transform: capitalize;
}

.results {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.product-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 0.9rem;
}

.product-card {
  background: var(--plum-panel);
  border: 1px solid var(--plum-border);
  border-radius: 12px;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.7rem;
  transition: border-color var(--transition-fast);
}

.product-card:hover {
  border-color: var(--gold);
}

.product-card__name {
  font-size: var(--text-base);
  font-weight: 600;
  color: var(--text-primary);
}

.product-card__link {
  font-size: var(--text-sm);
  color: var(--gold);
  text-decoration: none;
  border: 1px solid var(--gold);
  border-radius: 8px;
  padding: 0.35rem 0.75rem;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.product-card__link:hover {
  background: var(--gold);
  color: var(--plum-deep);
}
"#;
