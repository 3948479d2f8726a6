//! Site-wide stylesheet. Component-specific rules that only matter to one
//! component live next to it in an inline `<style>` block instead.

pub const GLOBAL_CSS: &str = r#"
:root {
    --bg: #0b0b14;
    --bg-soft: #141425;
    --text: #f1f1f7;
    --muted: #a3a3bd;
    --accent: #8b5cf6;
    --accent-2: #ec4899;
    --card: rgba(255, 255, 255, 0.05);
    --border: rgba(255, 255, 255, 0.1);
    --radius: 16px;
}

* { box-sizing: border-box; margin: 0; padding: 0; }
html { scroll-behavior: smooth; }
body {
    font-family: 'Inter', system-ui, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
}
a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; }

.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.section { padding: 96px 0; }
.section-header { text-align: center; margin-bottom: 56px; }
.section-title { font-size: 2.5rem; margin: 8px 0 16px; }
.section-subtitle { color: var(--muted); max-width: 640px; margin: 0 auto; }
.eyebrow { color: var(--accent); text-transform: uppercase; letter-spacing: 0.12em; font-size: 0.85rem; }
.text-gradient {
    background: linear-gradient(135deg, var(--accent), var(--accent-2));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}
.glass-card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 28px;
    backdrop-filter: blur(12px);
}
.hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; cursor: pointer; }
.hover-lift:hover { transform: translateY(-6px); box-shadow: 0 16px 40px rgba(139, 92, 246, 0.2); }

.btn-primary, .btn-outline {
    display: inline-flex; align-items: center; justify-content: center; gap: 8px;
    padding: 12px 28px; border-radius: 999px; font-weight: 600; border: none;
    transition: transform 0.2s ease, opacity 0.2s ease;
}
.btn-primary { background: linear-gradient(135deg, var(--accent), var(--accent-2)); color: #fff; }
.btn-outline { background: transparent; color: var(--text); border: 1px solid var(--border); }
.btn-primary:hover, .btn-outline:hover { transform: translateY(-2px); }
.btn-primary:disabled { opacity: 0.6; cursor: not-allowed; transform: none; }
.btn-block { width: 100%; }

/* Header */
.site-header {
    position: fixed; top: 0; left: 0; right: 0; z-index: 50;
    padding: 20px 0; transition: background 0.3s ease, padding 0.3s ease;
}
.site-header.scrolled { background: rgba(11, 11, 20, 0.85); backdrop-filter: blur(12px); padding: 12px 0; }
.nav-content { max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; align-items: center; justify-content: space-between; }
.nav-logo { display: flex; align-items: center; gap: 10px; font-weight: 700; font-size: 1.25rem; }
.logo-mark {
    width: 36px; height: 36px; border-radius: 10px; display: grid; place-items: center;
    background: linear-gradient(135deg, var(--accent), var(--accent-2));
}
.nav-links { display: flex; align-items: center; gap: 28px; list-style: none; }
.nav-link { color: var(--muted); transition: color 0.2s ease; }
.nav-link:hover, .nav-link.active { color: var(--text); }
.has-dropdown { position: relative; }
.dropdown-trigger { display: flex; align-items: center; gap: 4px; }
.dropdown-toggle { background: none; border: none; color: var(--muted); }
.dropdown-menu {
    position: absolute; top: 100%; left: 0; min-width: 220px; list-style: none;
    background: var(--bg-soft); border: 1px solid var(--border); border-radius: 12px; padding: 8px;
    opacity: 0; visibility: hidden; transform: translateY(8px); transition: all 0.2s ease;
}
.has-dropdown.open .dropdown-menu { opacity: 1; visibility: visible; transform: translateY(0); }
.dropdown-link { display: block; padding: 8px 12px; border-radius: 8px; color: var(--muted); }
.dropdown-link:hover { background: var(--card); color: var(--text); }
.burger-menu { display: none; background: none; border: none; flex-direction: column; gap: 5px; }
.burger-menu span { width: 24px; height: 2px; background: var(--text); }

/* Entrance animations */
.fade-up { animation: fadeUp 0.8s ease both; }
.float-in { animation: fadeUp 1s ease both; }
.delay-1 { animation-delay: 0.1s; }
.delay-2 { animation-delay: 0.2s; }
.delay-3 { animation-delay: 0.3s; }
.delay-4 { animation-delay: 0.4s; }
@keyframes fadeUp { from { opacity: 0; transform: translateY(24px); } to { opacity: 1; transform: none; } }

.reveal { opacity: 0; transition: opacity 0.7s ease, transform 0.7s ease; }
.reveal-below { transform: translateY(40px); }
.reveal-left { transform: translateX(-40px); }
.reveal-right { transform: translateX(40px); }
.reveal.revealed { opacity: 1; transform: none; }

.page-enter { animation: pageEnter 0.5s ease both; }
@keyframes pageEnter { from { opacity: 0; } to { opacity: 1; } }

/* Deferred media */
.lazy-image { position: relative; overflow: hidden; border-radius: var(--radius); }
.lazy-skeleton {
    position: absolute; inset: 0;
    background: linear-gradient(90deg, var(--card) 25%, rgba(255, 255, 255, 0.1) 50%, var(--card) 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
}
@keyframes shimmer { from { background-position: 200% 0; } to { background-position: -200% 0; } }
.lazy-media { display: block; width: 100%; height: auto; opacity: 0; transition: opacity 0.6s ease; }
.lazy-media.is-loaded { opacity: 1; }
.lazy-fallback {
    display: grid; place-items: center; min-height: 180px;
    background: var(--card); color: var(--muted); font-size: 0.9rem;
}

/* Hero */
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; padding-top: 96px; }
.hero-background { position: absolute; inset: 0; background: radial-gradient(circle at 70% 30%, rgba(139, 92, 246, 0.25), transparent 60%); }
.hero-grid { position: relative; display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.hero-badge span { border: 1px solid var(--border); border-radius: 999px; padding: 6px 16px; font-size: 0.85rem; }
.hero-title { font-size: 3.25rem; line-height: 1.15; margin: 24px 0; }
.hero-subtitle { color: var(--muted); font-size: 1.1rem; }
.hero-cta-group { display: flex; gap: 16px; margin: 32px 0; flex-wrap: wrap; }
.hero-stats, .about-stats { display: flex; gap: 32px; flex-wrap: wrap; }
.stat-value { font-size: 2rem; font-weight: 700; }
.stat-label { color: var(--muted); font-size: 0.9rem; }

/* Cards and grids */
.services-grid, .why-grid, .values-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 24px; }
.pricing-grid, .service-detail-columns, .skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 24px; }
.service-card h3, .why-card h3 { margin: 16px 0 8px; }
.service-card p, .why-card p { color: var(--muted); }
.service-card-footer { display: flex; justify-content: space-between; margin-top: 16px; font-size: 0.9rem; }
.learn-more, .why-number { color: var(--accent); }
.about-grid, .contact-grid, .service-detail-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 48px; align-items: center; }
.about-grid { margin-bottom: 56px; }
.about-image-wrapper { position: relative; }
.about-badge { position: absolute; bottom: -20px; right: -20px; display: flex; flex-direction: column; }
.about-highlights { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin: 24px 0; }
.about-highlight p { color: var(--muted); font-size: 0.9rem; }
.check-list, .plan-features { list-style: none; display: grid; gap: 8px; }
.check-list li::before { content: "✓ "; color: var(--accent); }
.process-list { padding-left: 20px; display: grid; gap: 8px; }
.skill-tags { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 16px; }
.skill-tag, .pill { border: 1px solid var(--border); border-radius: 999px; padding: 4px 14px; font-size: 0.85rem; }
.transition-band { padding: 72px 0; text-align: center; background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2)); }
.transition-band p { color: var(--muted); margin: 12px 0 24px; }
.statement { font-size: 1.4rem; font-style: italic; margin-bottom: 56px; text-align: center; }

/* Pricing */
.pricing-card { position: relative; display: flex; flex-direction: column; gap: 16px; }
.pricing-card.popular { border-color: var(--accent); }
.popular-badge { position: absolute; top: -12px; right: 24px; background: var(--accent); border-radius: 999px; padding: 2px 12px; font-size: 0.8rem; }
.price-amount { font-size: 2.5rem; font-weight: 700; }
.price-period, .plan-description { color: var(--muted); }
.plan-features .excluded { color: var(--muted); text-decoration: line-through; }
.plan-actions, .modal-actions { display: flex; gap: 12px; margin-top: auto; flex-wrap: wrap; }
.plan-details dt { color: var(--muted); font-size: 0.85rem; margin-top: 12px; }

/* Testimonials */
.testimonial-slider { max-width: 760px; margin: 0 auto; }
.testimonial-card { cursor: pointer; }
.slide-in { animation: slideIn 0.5s ease both; }
@keyframes slideIn { from { opacity: 0; transform: translateX(30px); } to { opacity: 1; transform: none; } }
.quote-mark { font-size: 4rem; line-height: 1; color: var(--accent); }
.testimonial-quote, .testimonial-full { font-size: 1.15rem; margin: 8px 0 24px; }
.testimonial-footer, .testimonial-author { display: flex; align-items: center; justify-content: space-between; gap: 16px; }
.avatar { width: 48px; height: 48px; border-radius: 50%; display: grid; place-items: center; background: linear-gradient(135deg, var(--accent), var(--accent-2)); font-weight: 700; }
.avatar-large { width: 72px; height: 72px; font-size: 1.5rem; }
.author-role, .click-hint, .label { color: var(--muted); font-size: 0.85rem; }
.star { color: #facc15; }
.carousel-nav { display: flex; align-items: center; justify-content: center; gap: 16px; margin-top: 24px; }
.carousel-arrow { background: var(--card); border: 1px solid var(--border); color: var(--text); width: 40px; height: 40px; border-radius: 50%; }
.carousel-dots { display: flex; gap: 8px; }
.carousel-dot { width: 10px; height: 10px; border-radius: 999px; border: none; background: var(--border); transition: width 0.3s ease; }
.carousel-dot.active { width: 28px; background: var(--accent); }

/* Modal */
.modal-backdrop { position: fixed; inset: 0; z-index: 100; background: rgba(0, 0, 0, 0.7); backdrop-filter: blur(4px); }
.modal-panel {
    position: fixed; top: 50%; left: 50%; z-index: 101; transform: translate(-50%, -50%);
    width: min(640px, calc(100% - 48px)); max-height: 90vh; overflow-y: auto;
    background: var(--bg-soft); border: 1px solid var(--border); border-radius: var(--radius); padding: 32px;
    animation: pageEnter 0.3s ease both;
}
.modal-close { position: absolute; top: 16px; right: 16px; background: none; border: none; color: var(--muted); font-size: 1.2rem; }
.modal-body h4 { margin: 20px 0 8px; }
.modal-meta, .service-meta { display: flex; gap: 24px; color: var(--muted); margin: 16px 0; }

/* Contact */
.contact-info { display: grid; gap: 16px; }
.contact-item { display: flex; gap: 16px; align-items: center; }
.contact-icon { font-size: 1.5rem; color: var(--accent); }
.contact-form { display: grid; gap: 16px; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
.form-field { display: grid; gap: 6px; }
.form-field input, .form-field select, .form-field textarea {
    background: rgba(255, 255, 255, 0.04); border: 1px solid var(--border); border-radius: 10px;
    color: var(--text); padding: 12px 14px; font: inherit;
}
.form-error { color: #f87171; }
.spinner { width: 18px; height: 18px; border: 2px solid rgba(255, 255, 255, 0.4); border-top-color: #fff; border-radius: 50%; animation: spin 0.8s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }

/* Pages */
.page-header { padding: 160px 0 48px; text-align: center; }
.page-title { font-size: 3rem; margin-top: 8px; }
.page-subtitle { color: var(--muted); max-width: 640px; margin: 16px auto 0; }
.not-found { min-height: 70vh; display: grid; place-items: center; text-align: center; }
.not-found h1 { font-size: 6rem; }
.not-found p { color: var(--muted); margin: 16px 0 32px; }

/* Footer */
.site-footer { border-top: 1px solid var(--border); padding: 64px 0 24px; }
.footer-grid { display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; gap: 32px; }
.footer-brand p { color: var(--muted); margin: 16px 0; }
.footer-column h4 { margin-bottom: 16px; }
.footer-column ul { list-style: none; display: grid; gap: 8px; color: var(--muted); }
.social-links { display: flex; gap: 12px; }
.social-links a { width: 36px; height: 36px; border-radius: 50%; display: grid; place-items: center; border: 1px solid var(--border); }
.footer-bottom { display: flex; justify-content: space-between; align-items: center; margin-top: 48px; color: var(--muted); font-size: 0.9rem; }
.back-to-top { background: var(--card); border: 1px solid var(--border); color: var(--text); width: 40px; height: 40px; border-radius: 50%; }

@media (max-width: 900px) {
    .hero-grid, .about-grid, .contact-grid, .service-detail-grid, .form-row { grid-template-columns: 1fr; }
    .footer-grid { grid-template-columns: 1fr 1fr; }
    .hero-title { font-size: 2.4rem; }
    .burger-menu { display: flex; }
    .nav-links {
        display: none; position: absolute; top: 100%; left: 0; right: 0;
        flex-direction: column; background: var(--bg-soft); padding: 24px;
    }
    .nav-links.mobile-menu-open { display: flex; }
    .dropdown-menu { position: static; opacity: 1; visibility: visible; transform: none; display: none; }
    .has-dropdown.open .dropdown-menu { display: block; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal, .lazy-media, .fade-up, .float-in, .slide-in, .page-enter { animation: none; transition: none; opacity: 1; transform: none; }
}
"#;
