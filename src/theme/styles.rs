//! Global CSS styles for the Cartoonize Workbench.
//!
//! Dark terminal palette; class names are shared with `cartoonize-ui`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --void-black: #0a0a0a;
  --void-lighter: #111416;
  --void-border: #1f2326;

  /* Accents */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Semantic */
  --danger: #ff3366;
  --success: #7cb87c;
  --info: #5f8fff;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.workbench {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 1.5rem 2rem;
  min-height: 100vh;
}

.app-header {
  display: flex;
  align-items: center;
  border-bottom: 1px solid var(--void-border);
  padding-bottom: 1rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 20px var(--gold-glow);
  letter-spacing: 0.05em;
}

.spacer {
  flex: auto;
}

/* === Buttons === */
.btn-primary,
.btn-secondary {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  padding: 0.5rem 1.25rem;
  border-radius: 4px;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: transparent;
  color: var(--cyan);
  border: 1px solid var(--cyan);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 0 12px var(--cyan-glow);
  transform: translateY(-1px);
}

.btn-secondary {
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--void-border);
}

.btn-secondary:hover:not(:disabled) {
  color: var(--text-primary);
  border-color: var(--text-muted);
}

button:disabled {
  opacity: 0.5;
  cursor: default;
}

.icon-btn {
  background: none;
  border: none;
  color: var(--text-secondary);
  font-size: var(--text-xl);
  line-height: 1;
  cursor: pointer;
  padding: 0.25rem;
  transition: color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--cyan);
}

/* === Upload === */
.upload-row {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.upload-status {
  font-size: var(--text-sm);
  color: var(--text-muted);
  font-style: italic;
}

/* === Panes === */
.panes {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1.5rem;
}

.pane {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 6px;
  padding: 1rem;
  min-height: 320px;
}

.pane__title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-style: italic;
  color: var(--gold);
}

.img-container {
  max-width: 100%;
  max-height: 520px;
  object-fit: contain;
  align-self: center;
  border-radius: 4px;
}

.pane__footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.pane__caption {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Loading === */
.spinner-box {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  margin: auto;
}

.loading-spinner {
  width: 24px;
  height: 24px;
  border: 3px solid rgba(0, 212, 170, 0.2);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Settings Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(10, 10, 10, 0.85);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
}

.settings-modal {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 8px;
  padding: 1.5rem;
  width: min(480px, 100%);
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}

.modal-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.modal-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
}

.modal-actions {
  display: flex;
  justify-content: flex-end;
  gap: 1rem;
}

/* === Form Fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  font-size: var(--text-xs);
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.input-field {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  background: transparent;
  color: var(--cyan);
  border: 1px solid var(--void-border);
  border-radius: 4px;
  padding: 0.5rem 0.75rem;
  outline: none;
  transition: box-shadow var(--transition-fast), border-color var(--transition-fast);
}

.input-field:focus {
  border-color: var(--cyan);
  box-shadow: 0 0 8px var(--cyan-glow);
}

.input-field::placeholder {
  color: var(--text-muted);
  font-style: italic;
}

/* === Toasts === */
.notice-stack {
  position: fixed;
  top: 1rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 2000;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-left-width: 3px;
  border-radius: 4px;
  padding: 0.6rem 1rem;
  font-size: var(--text-sm);
  cursor: pointer;
  box-shadow: 0 4px 18px rgba(0, 0, 0, 0.5);
  animation: toast-in 200ms ease-out;
}

.toast--info { border-left-color: var(--info); }
.toast--success { border-left-color: var(--success); }
.toast--error { border-left-color: var(--danger); }

.toast--error .toast__icon { color: var(--danger); }
.toast--success .toast__icon { color: var(--success); }
.toast--info .toast__icon { color: var(--info); }

@keyframes toast-in {
  from { opacity: 0; transform: translateY(-6px); }
  to { opacity: 1; transform: translateY(0); }
}

@media (max-width: 760px) {
  .panes {
    grid-template-columns: 1fr;
  }
}
"#;
