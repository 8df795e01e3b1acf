//! Arabic message table.

pub const MESSAGES: &[(&str, &str)] = &[
    // Navigation
    ("nav.home", "الرئيسية"),
    ("nav.dashboard", "لوحة التحكم"),
    ("nav.pricing", "الأسعار"),
    ("nav.api", "توثيق API"),
    ("nav.login", "تسجيل دخول"),
    ("nav.signup", "التسجيل"),
    ("nav.logout", "تسجيل خروج"),
    // Home
    ("home.hero.title", "حلول الذكاء الاصطناعي"),
    ("home.hero.subtitle", "دع الذكاء الاصطناعي يقرأ فواتيرك"),
    (
        "home.hero.description",
        "Doc-IN هو قارئ فواتير مدعوم بالذكاء الاصطناعي مصمم خصيصاً للشركات الجزائرية. حول معالجة فواتيرك باستخدام الذكاء الاصطناعي المتطور.",
    ),
    ("home.cta.dashboard", "استكشف لوحة التحكم"),
    ("home.cta.start", "ابدأ الآن"),
    // Features
    ("features.title", "لماذا تختار Doc-IN؟"),
    ("features.accuracy.title", "دقة مدعومة بالذكاء الاصطناعي"),
    (
        "features.accuracy.desc",
        "الذكاء الاصطناعي المتقدم يستخرج البيانات بدقة تزيد عن 99% من الفواتير العربية والفرنسية.",
    ),
    ("features.speed.title", "سرعة البرق"),
    ("features.speed.desc", "معالجة مئات الفواتير في ثوانٍ، وليس ساعات."),
    ("features.integration.title", "تكامل سهل"),
    (
        "features.integration.desc",
        "تكامل REST API بسيط مع أنظمة عملك الحالية.",
    ),
    ("features.support.title", "دعم محلي"),
    (
        "features.support.desc",
        "دعم مخصص للشركات الجزائرية باللغة العربية والفرنسية.",
    ),
    // About
    ("about.title", "حول حلول الذكاء الاصطناعي"),
    (
        "about.description",
        "نحن شركة تكنولوجيا متطورة تركز على جلب ابتكارات الذكاء الاصطناعي للشركات الجزائرية. منتجنا الرئيسي، Doc-IN، يثور معالجة الفواتير من خلال خوارزميات التعلم الآلي المتقدمة.",
    ),
    // Benefits
    ("benefits.title", "حول عملك"),
    ("benefits.time.title", "وفر الوقت"),
    ("benefits.time.desc", "قلل وقت معالجة الفواتير بنسبة 90%"),
    ("benefits.cost.title", "خفض التكاليف"),
    ("benefits.cost.desc", "قلل النفقات التشغيلية بشكل كبير"),
    ("benefits.accuracy.title", "حسن الدقة"),
    ("benefits.accuracy.desc", "تخلص من الأخطاء البشرية في إدخال البيانات"),
    // Dashboard
    ("dashboard.welcome", "مرحباً بعودتك"),
    ("dashboard.apiKey", "مفتاح API"),
    ("dashboard.plan", "الخطة الحالية"),
    ("dashboard.processed", "الفواتير المعالجة"),
    ("dashboard.thisMonth", "هذا الشهر"),
    ("dashboard.usage", "إحصائيات الاستخدام"),
    // Pricing
    ("pricing.title", "اختر خطتك"),
    ("pricing.test.name", "خطة التجربة"),
    ("pricing.test.price", "مجاني"),
    ("pricing.test.desc", "مثالي للاختبار"),
    ("pricing.test.invoices", "25 فاتورة/شهر"),
    ("pricing.pro.name", "خطة المحترفين"),
    ("pricing.pro.price", "1,500 دج/شهر"),
    ("pricing.pro.desc", "للشركات النامية"),
    ("pricing.pro.invoices", "500 فاتورة/شهر"),
    ("pricing.enterprise.name", "المؤسسات"),
    ("pricing.enterprise.price", "اتصل بنا"),
    ("pricing.enterprise.desc", "للمنظمات الكبيرة"),
    ("pricing.enterprise.invoices", "فواتير غير محدودة"),
    // API docs
    ("api.title", "توثيق API"),
    ("api.overview", "نظرة عامة على Doc-IN REST API"),
    ("api.upload.title", "رفع فاتورة"),
    ("api.extract.title", "استخراج البيانات"),
    ("api.usage.title", "فحص الاستخدام"),
    // Auth
    ("auth.login.title", "تسجيل دخول إلى حلول الذكاء الاصطناعي"),
    ("auth.signup.title", "انضم إلى حلول الذكاء الاصطناعي"),
    ("auth.email", "البريد الإلكتروني"),
    ("auth.password", "كلمة المرور"),
    ("auth.name", "الاسم الكامل"),
    ("auth.company", "اسم الشركة"),
    ("auth.login.button", "تسجيل دخول"),
    ("auth.signup.button", "إنشاء حساب"),
    ("auth.switch.login", "لديك حساب؟ سجل دخول"),
    ("auth.switch.signup", "ليس لديك حساب؟ سجل الآن"),
    // Notifications
    ("toast.login.success", "تم تسجيل الدخول"),
    ("toast.login.success.desc", "مرحباً بعودتك إلى حلول الذكاء الاصطناعي!"),
    ("toast.login.failed", "فشل تسجيل الدخول"),
    (
        "toast.login.failed.desc",
        "بيانات غير صحيحة. جرب demo@ai.dz / demo123",
    ),
    ("toast.signup.success", "تم إنشاء الحساب"),
    (
        "toast.signup.success.desc",
        "مرحباً بك في حلول الذكاء الاصطناعي! خطة التجربة مفعلة الآن.",
    ),
    ("toast.signup.invalid", "فشل التسجيل"),
    (
        "toast.signup.invalid.desc",
        "يرجى إدخال اسمك وبريد إلكتروني صالح.",
    ),
    ("toast.logout", "تم تسجيل الخروج"),
    ("toast.logout.desc", "نراك قريباً!"),
    // Footer
    ("footer.company", "حلول الذكاء الاصطناعي"),
    ("footer.description", "ثورة في العمليات التجارية مع الذكاء الاصطناعي"),
    ("footer.rights", "جميع الحقوق محفوظة."),
    ("footer.contact", "اتصل"),
    ("footer.support", "الدعم"),
    ("footer.privacy", "الخصوصية"),
    ("footer.terms", "الشروط"),
];
