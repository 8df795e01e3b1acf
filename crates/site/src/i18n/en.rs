//! English message table.

pub const MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "Home"),
    ("nav.dashboard", "Dashboard"),
    ("nav.pricing", "Pricing"),
    ("nav.api", "API Docs"),
    ("nav.login", "Login"),
    ("nav.signup", "Sign Up"),
    ("nav.logout", "Logout"),
    // Home
    ("home.hero.title", "AI Solutions"),
    ("home.hero.subtitle", "Let AI read your invoices"),
    (
        "home.hero.description",
        "Doc-IN is an AI-powered invoice reader designed specifically for Algerian businesses. Transform your invoice processing with cutting-edge artificial intelligence.",
    ),
    ("home.cta.dashboard", "Explore Dashboard"),
    ("home.cta.start", "Start Now"),
    // Features
    ("features.title", "Why Choose Doc-IN?"),
    ("features.accuracy.title", "AI-Powered Accuracy"),
    (
        "features.accuracy.desc",
        "Our advanced AI extracts data with 99%+ accuracy from Arabic and French invoices.",
    ),
    ("features.speed.title", "Lightning Fast"),
    (
        "features.speed.desc",
        "Process hundreds of invoices in seconds, not hours.",
    ),
    ("features.integration.title", "Easy Integration"),
    (
        "features.integration.desc",
        "Simple REST API integration with your existing business systems.",
    ),
    ("features.support.title", "Local Support"),
    (
        "features.support.desc",
        "Dedicated support for Algerian businesses in Arabic and French.",
    ),
    // About
    ("about.title", "About AI Solutions"),
    (
        "about.description",
        "We are a cutting-edge technology company focused on bringing AI innovation to Algerian businesses. Our flagship product, Doc-IN, revolutionizes invoice processing through advanced machine learning algorithms.",
    ),
    // Benefits
    ("benefits.title", "Transform Your Business"),
    ("benefits.time.title", "Save Time"),
    ("benefits.time.desc", "Reduce invoice processing time by 90%"),
    ("benefits.cost.title", "Cut Costs"),
    ("benefits.cost.desc", "Lower operational expenses significantly"),
    ("benefits.accuracy.title", "Improve Accuracy"),
    ("benefits.accuracy.desc", "Eliminate human errors in data entry"),
    // Dashboard
    ("dashboard.welcome", "Welcome back"),
    ("dashboard.apiKey", "API Key"),
    ("dashboard.plan", "Current Plan"),
    ("dashboard.processed", "Invoices Processed"),
    ("dashboard.thisMonth", "This Month"),
    ("dashboard.usage", "Usage Statistics"),
    // Pricing
    ("pricing.title", "Choose Your Plan"),
    ("pricing.test.name", "Test Plan"),
    ("pricing.test.price", "Free"),
    ("pricing.test.desc", "Perfect for testing"),
    ("pricing.test.invoices", "25 invoices/month"),
    ("pricing.pro.name", "Pro Plan"),
    ("pricing.pro.price", "1,500 DA/month"),
    ("pricing.pro.desc", "For growing businesses"),
    ("pricing.pro.invoices", "500 invoices/month"),
    ("pricing.enterprise.name", "Enterprise"),
    ("pricing.enterprise.price", "Contact us"),
    ("pricing.enterprise.desc", "For large organizations"),
    ("pricing.enterprise.invoices", "Unlimited invoices"),
    // API docs
    ("api.title", "API Documentation"),
    ("api.overview", "Doc-IN REST API Overview"),
    ("api.upload.title", "Upload Invoice"),
    ("api.extract.title", "Extract Data"),
    ("api.usage.title", "Check Usage"),
    // Auth
    ("auth.login.title", "Login to AI Solutions"),
    ("auth.signup.title", "Join AI Solutions"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.name", "Full Name"),
    ("auth.company", "Company Name"),
    ("auth.login.button", "Login"),
    ("auth.signup.button", "Create Account"),
    ("auth.switch.login", "Already have an account? Login"),
    ("auth.switch.signup", "Don't have an account? Sign up"),
    // Notifications
    ("toast.login.success", "Login Successful"),
    ("toast.login.success.desc", "Welcome back to AI Solutions!"),
    ("toast.login.failed", "Login Failed"),
    (
        "toast.login.failed.desc",
        "Invalid credentials. Try demo@ai.dz / demo123",
    ),
    ("toast.signup.success", "Account Created"),
    (
        "toast.signup.success.desc",
        "Welcome to AI Solutions! Your Test plan is now active.",
    ),
    ("toast.signup.invalid", "Signup Failed"),
    (
        "toast.signup.invalid.desc",
        "Please enter your name and a valid email address.",
    ),
    ("toast.logout", "Logged Out"),
    ("toast.logout.desc", "See you soon!"),
    // Footer
    ("footer.company", "AI Solutions"),
    ("footer.description", "Revolutionizing business processes with AI"),
    ("footer.rights", "All rights reserved."),
    ("footer.contact", "Contact"),
    ("footer.support", "Support"),
    ("footer.privacy", "Privacy"),
    ("footer.terms", "Terms"),
];
