//! The fixed parts of the staff page. Header and footer are `data-include`
//! placeholders that the site's scripts hydrate in the browser.

pub(super) const HEAD: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=0">
    <title>Our Staff - People First Urgent Care</title>
    <meta name="description" content="Meet the dedicated healthcare professionals at People First Urgent Care.">
    <meta name="theme-color" content="#1aa060">
    <link rel="canonical" href="https://www.peoplefirsturgentcare.com/our-staff.html">
    <meta property="og:title" content="Our Staff - People First Urgent Care">
    <meta property="og:description" content="Meet the dedicated healthcare professionals at People First Urgent Care.">
    <meta property="og:type" content="website">
    <meta property="og:url" content="https://www.peoplefirsturgentcare.com/our-staff.html">
    <meta property="og:image" content="https://www.peoplefirsturgentcare.com/assets/images/dr-hamad-ahmad.jpg">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="Our Staff - People First Urgent Care">
    <meta name="twitter:description" content="Meet the dedicated healthcare professionals at People First Urgent Care.">
    <meta name="twitter:image" content="https://www.peoplefirsturgentcare.com/assets/images/dr-hamad-ahmad.jpg">
    <link rel="icon" href="assets/images/favicon.ico" type="image/x-icon">
    <link rel="stylesheet" href="assets/css/core/mobile-optimizations.css">
    <link rel="stylesheet" href="assets/css/components/compact-layout.css">
    <link rel="stylesheet" href="assets/css/components/advanced-effects.css">
    <link rel="stylesheet" href="assets/css/components/buttons/action-buttons.css">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css">
    <link rel="stylesheet" href="assets/css/core/custom-redesign.css">
    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=Montserrat:wght@400;500;600;700&display=swap" rel="stylesheet">
    <link rel="stylesheet" href="assets/css/header-system-complete.css">
    <link rel="stylesheet" href="assets/css/layout-fixes.css">
    <style>
        .staff-card .staff-image.image-zoom-container{
            display:flex;
            justify-content:center;
            align-items:center;
        }
        .staff-card .staff-image.image-zoom-container img{
            margin:0 auto;
        }
    </style>
</head>
"##;

pub(super) const BODY_OPEN: &str = r#"<body>
    <div data-include="header"></div>
    <main id="main-content">
        <section class="page-header page-header-with-bg" style="background-image: linear-gradient(rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.5)), url('assets/images/medical-office-doctors.jpg');">
            <div class="container">
                <span class="page-badge">Our Team</span>
                <h1 class="gradient-text">Our Staff</h1>
                <p>Meet our team of dedicated healthcare professionals</p>
            </div>
            <div class="header-shape-divider">
                <svg data-name="Layer 1" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1200 120" preserveAspectRatio="none">
                    <path d="M0,0V120H1200V0Z" class="shape-fill"></path>
                </svg>
            </div>
        </section>
        <section class="section">
            <div class="container">
"#;

pub(super) const BODY_CLOSE: &str = r#"            </div>
        </section>
    </main>
    <div data-include="footer"></div>
"#;

pub(super) const FOOTER: &str = r#"    <script src="assets/js/core/custom.js" defer></script>
    <script src="assets/js/core/main.js" defer></script>
    <script src="assets/js/mobile/mobile-enhancements.js" defer></script>
    <script src="assets/js/header-inline.js" defer></script>
    <script src="assets/js/footer-inline.js" defer></script>
    <script src="assets/js/core/header-system-new.js" defer></script>
</body>
</html>
"#;

pub(super) const EMPTY_STATE: &str =
    "No staff profiles are available in this section yet. Please check back soon.";

/// Section heading and grid attributes for one category.
pub(super) struct Section {
    pub badge: &'static str,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub grid_class: &'static str,
    pub aria_label: &'static str,
}

pub(super) const MEDICAL: Section = Section {
    badge: "Healthcare Experts",
    heading: "Medical Providers",
    blurb: "Our experienced team of healthcare professionals",
    grid_class: "staff-grid",
    aria_label: "Medical providers",
};

pub(super) const SUPPORT: Section = Section {
    badge: "Administrative Team",
    heading: "Support Staff",
    blurb: "The team that keeps our practice running smoothly",
    grid_class: "staff-grid support-staff-grid",
    aria_label: "Support staff",
};
