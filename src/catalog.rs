//! Static marketing content: program, pricing, gallery, studio facts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramModule {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub lessons: u32,
}

impl ProgramModule {
    /// Two-digit label shown next to the module title ("01" .. "13").
    pub fn label(&self) -> String {
        module_label(self.id)
    }
}

pub fn module_label(id: u32) -> String {
    if id < 10 {
        format!("0{id}")
    } else {
        id.to_string()
    }
}

pub const PROGRAM: [ProgramModule; 13] = [
    ProgramModule {
        id: 1,
        title: "Знакомство с материалами",
        description: "Разбираемся в акриле, кистях и холстах. Готовим рабочее место и делаем первые пробные мазки без страха испортить.",
        lessons: 2,
    },
    ProgramModule {
        id: 2,
        title: "Цвет и палитра",
        description: "Учимся смешивать оттенки, получать чистые и глубокие цвета и собирать гармоничную палитру для картины.",
        lessons: 2,
    },
    ProgramModule {
        id: 3,
        title: "Композиция",
        description: "Как расположить главное и второстепенное, чтобы взгляд сам гулял по холсту. Простые правила, которые работают всегда.",
        lessons: 2,
    },
    ProgramModule {
        id: 4,
        title: "Картина «Золотой закат»",
        description: "Первая полноценная работа: мягкие градиенты неба, отражения в воде и тёплый свет уходящего солнца.",
        lessons: 3,
    },
    ProgramModule {
        id: 5,
        title: "Картина «Зимняя сказка»",
        description: "Холодная гамма, снежные фактуры и уютные огоньки в окнах. Учимся передавать настроение через цвет.",
        lessons: 3,
    },
    ProgramModule {
        id: 6,
        title: "Фактура и мастихин",
        description: "Рельефные мазки, работа мастихином и сухой кистью. Добавляем картинам объём и характер.",
        lessons: 2,
    },
    ProgramModule {
        id: 7,
        title: "Картина «Грация»",
        description: "Силуэт балерины, лёгкость движения и воздушный фон. Учимся рисовать фигуру без сложной анатомии.",
        lessons: 3,
    },
    ProgramModule {
        id: 8,
        title: "Картина «Цветочный этюд»",
        description: "Велосипед с корзиной цветов: работаем с деталями, бликами и сочными акцентами.",
        lessons: 3,
    },
    ProgramModule {
        id: 9,
        title: "Свет и тень",
        description: "Объём через светотень, рефлексы и падающие тени. Превращаем плоские формы в живые предметы.",
        lessons: 2,
    },
    ProgramModule {
        id: 10,
        title: "Портрет вдохновения",
        description: "Стилизованный портрет: пропорции лица, мягкие переходы кожи и выразительный взгляд.",
        lessons: 2,
    },
    ProgramModule {
        id: 11,
        title: "Пейзаж по собственному замыслу",
        description: "Применяем всё изученное к своей идее: от эскиза до готовой работы.",
        lessons: 2,
    },
    ProgramModule {
        id: 12,
        title: "Абстракция",
        description: "Свобода цвета и формы. Учимся доверять интуиции и создавать интерьерные абстрактные картины.",
        lessons: 2,
    },
    ProgramModule {
        id: 13,
        title: "Финальные штрихи и оформление",
        description: "Лакировка, подпись, оформление в раму и советы, как красиво разместить коллекцию работ дома.",
        lessons: 2,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    Online,
    WithMaterials,
}

impl PlanId {
    /// Anchor used for the plan card
    pub fn slug(&self) -> &'static str {
        match self {
            PlanId::Online => "online",
            PlanId::WithMaterials => "with-materials",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub id: PlanId,
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    /// Contents of the materials box, empty for the online-only plan
    pub box_contents: &'static [&'static str],
    pub call_to_action: &'static str,
    /// Shorter pitch shown on the locked dashboard
    pub dashboard_description: &'static str,
    pub dashboard_features: &'static [&'static str],
    pub is_popular: bool,
}

pub const PRICING: [PricingPlan; 2] = [
    PricingPlan {
        id: PlanId::Online,
        title: "Online course",
        price: "139 €",
        description: "Для тех, у кого уже есть краски и холсты",
        features: &[
            "Полная программа: 13 модулей",
            "30 пошаговых видео-уроков",
            "8 готовых картин по итогу",
            "Доступ к платформе на 6 месяцев",
            "Поддержка в закрытом чате",
            "Сертификат об окончании",
        ],
        box_contents: &[],
        call_to_action: "Купить курс",
        dashboard_description: "Для тех, у кого уже есть материалы",
        dashboard_features: &[
            "30 видео-уроков",
            "13 модулей",
            "6 месяцев доступа",
            "Сертификат",
        ],
        is_popular: false,
    },
    PricingPlan {
        id: PlanId::WithMaterials,
        title: "Course + Materials",
        price: "189 €",
        description: "Начните сразу — мы всё пришлем!",
        features: &[
            "Всё из тарифа Online course",
            "Премиальный бокс материалов",
            "Идеально для подарка себе",
            "Начните творить через 2 дня",
        ],
        box_contents: &[
            "8 холстов (30×40 см)",
            "Набор профессионального акрила",
            "5 качественных кистей",
            "Палитра и фартук",
            "Бесплатная доставка",
        ],
        call_to_action: "Хочу с набором",
        dashboard_description: "Всё включено — начните сразу!",
        dashboard_features: &[
            "Всё из Online course",
            "8 холстов 30×40 см",
            "Набор профи-красок",
            "Кисти и палитра",
            "Бесплатная доставка",
        ],
        is_popular: true,
    },
];

/// Label on the disabled purchase buttons until online payment exists.
pub const PAYMENT_PENDING_LABEL: &str = "Скоро — оплата онлайн";

pub const POPULAR_BADGE: &str = "Бестселлер";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryItem {
    pub src: &'static str,
    pub title: &'static str,
}

pub const GALLERY: [GalleryItem; 8] = [
    GalleryItem { src: "/images/painting-sunset.png", title: "Золотой закат" },
    GalleryItem { src: "/images/painting-winter.png", title: "Зимняя сказка" },
    GalleryItem { src: "/images/painting-ballet.png", title: "Грация" },
    GalleryItem { src: "/images/painting-bicycle.png", title: "Цветочный этюд" },
    GalleryItem { src: "/images/portrait.jpg", title: "Портрет вдохновения" },
    GalleryItem { src: "/images/group1.jpg", title: "Атмосфера студии" },
    GalleryItem { src: "/images/group2.jpg", title: "Наши ученики" },
    GalleryItem { src: "/images/group4.jpg", title: "Праздник красок" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PainPoint {
    pub title: &'static str,
    pub text: &'static str,
}

pub const PAIN_POINTS: [PainPoint; 4] = [
    PainPoint {
        title: "Страх чистого листа",
        text: "Вы мечтаете рисовать, но боитесь испортить холст и не знаете, с чего начать.",
    },
    PainPoint {
        title: "Поиск качественного досуга",
        text: "Хочется переключиться после работы на что-то созидательное и красивое.",
    },
    PainPoint {
        title: "Недостаток базы",
        text: "Думаете, что рисование — это только для талантливых от природы, а не навык.",
    },
    PainPoint {
        title: "Желание украсить дом",
        text: "Хотите создавать вещи, которые будут наполнять интерьер вашим характером.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioStat {
    pub value: &'static str,
    pub caption: &'static str,
}

pub const STUDIO_STATS: [StudioStat; 2] = [
    StudioStat { value: "10+", caption: "Лет опыта" },
    StudioStat { value: "20k+", caption: "Довольных гостей" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Я никогда не рисовала. Курс подойдёт?",
        answer: "Да. Программа рассчитана на новичков: каждый урок показывает работу шаг за шагом, от первого мазка до готовой картины.",
    },
    FaqEntry {
        question: "Какие материалы нужны?",
        answer: "Акриловые краски, несколько кистей и холсты 30×40 см. Если не хотите искать всё сами, выберите тариф с набором материалов.",
    },
    FaqEntry {
        question: "Как долго открыт доступ к урокам?",
        answer: "Доступ к платформе действует 6 месяцев с момента покупки. Уроки можно пересматривать сколько угодно раз.",
    },
    FaqEntry {
        question: "Можно ли смотреть уроки с телефона?",
        answer: "Да, личный кабинет работает в любом современном браузере на компьютере, планшете и телефоне.",
    },
];

pub fn total_lessons() -> u32 {
    PROGRAM.iter().map(|module| module.lessons).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_matches_advertised_totals() {
        assert_eq!(PROGRAM.len(), 13);
        assert_eq!(total_lessons(), 30);
        assert!(PROGRAM.windows(2).all(|pair| pair[0].id + 1 == pair[1].id));
    }

    #[test]
    fn test_module_label_padding() {
        assert_eq!(module_label(1), "01");
        assert_eq!(module_label(9), "09");
        assert_eq!(module_label(10), "10");
        assert_eq!(PROGRAM[12].label(), "13");
    }

    #[test]
    fn test_plan_slugs_are_distinct() {
        assert_ne!(PRICING[0].id.slug(), PRICING[1].id.slug());
    }

    #[test]
    fn test_single_popular_plan() {
        let popular = PRICING.iter().filter(|plan| plan.is_popular).collect::<Vec<_>>();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, PlanId::WithMaterials);
        assert!(!popular[0].box_contents.is_empty());
    }
}
