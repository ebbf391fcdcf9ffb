use crate::domain::{Grade, Subject};

// Math tags are split per grade so the catalogue can accumulate within a
// band: a grade sees its own tags plus everything taught earlier in the
// same band, never tags from the other band.
const MATH_GRADE_7: &[&str] = &[
    "有理数",
    "整式的加减",
    "一元一次方程",
    "几何图形初步",
    "相交线与平行线",
    "实数",
];

const MATH_GRADE_8: &[&str] = &[
    "三角形",
    "全等三角形",
    "轴对称",
    "整式的乘法与因式分解",
    "分式",
    "一次函数",
    "勾股定理",
];

const MATH_GRADE_9: &[&str] = &[
    "一元二次方程",
    "二次函数",
    "旋转",
    "圆",
    "相似",
    "锐角三角函数",
    "概率初步",
];

const MATH_GRADE_10: &[&str] = &[
    "集合与常用逻辑用语",
    "函数的概念与性质",
    "指数函数与对数函数",
    "三角函数",
    "平面向量",
    "立体几何初步",
];

const MATH_GRADE_11: &[&str] = &[
    "数列",
    "解三角形",
    "直线和圆的方程",
    "圆锥曲线",
    "统计与概率",
    "空间向量与立体几何",
];

const MATH_GRADE_12: &[&str] = &[
    "导数及其应用",
    "复数",
    "计数原理",
    "随机变量及其分布",
    "统计案例",
];

const CHINESE_TAGS: &[&str] = &[
    "现代文阅读",
    "文言文阅读",
    "古诗词鉴赏",
    "病句辨析",
    "名著导读",
    "作文",
];

const ENGLISH_TAGS: &[&str] = &[
    "时态",
    "从句",
    "非谓语动词",
    "介词与冠词",
    "情态动词",
    "完形填空",
    "阅读理解",
];

const PHYSICS_TAGS: &[&str] = &[
    "声现象",
    "光学",
    "热学",
    "力学",
    "功和能",
    "电学",
    "电磁学",
];

const CHEMISTRY_TAGS: &[&str] = &[
    "物质的变化和性质",
    "化学式与化合价",
    "质量守恒定律",
    "溶液",
    "金属",
    "酸碱盐",
    "化学实验",
];

const BIOLOGY_TAGS: &[&str] = &[
    "细胞",
    "植物学",
    "人体生理",
    "微生物",
    "遗传与进化",
    "生态系统",
];

const HISTORY_TAGS: &[&str] = &[
    "中国古代史",
    "中国近代史",
    "中国现代史",
    "世界古代史",
    "世界近代史",
    "世界现代史",
];

const GEOGRAPHY_TAGS: &[&str] = &[
    "地球与地图",
    "中国地理",
    "世界地理",
    "自然地理",
    "人文地理",
];

const POLITICS_TAGS: &[&str] = &[
    "心理与道德",
    "法律常识",
    "国情教育",
    "经济常识",
    "哲学常识",
];

fn math_grade_tags(grade: Grade) -> &'static [&'static str] {
    match grade {
        Grade::Seven => MATH_GRADE_7,
        Grade::Eight => MATH_GRADE_8,
        Grade::Nine => MATH_GRADE_9,
        Grade::Ten => MATH_GRADE_10,
        Grade::Eleven => MATH_GRADE_11,
        Grade::Twelve => MATH_GRADE_12,
    }
}

/// Cumulative math catalogue: the tags for `grade` plus every lower grade
/// of the same band, in ascending grade order. No grade means the union
/// of all six levels.
pub fn math_tags(grade: Option<Grade>) -> Vec<&'static str> {
    let selected = Grade::all().iter().copied().filter(|candidate| match grade {
        Some(grade) => candidate.band() == grade.band() && *candidate <= grade,
        None => true,
    });
    selected
        .flat_map(|grade| math_grade_tags(grade).iter().copied())
        .collect()
}

/// Fixed catalogue for a non-math subject. Math and the catch-all are
/// handled by [`math_tags`] and [`tag_listing`] respectively.
pub fn subject_tags(subject: Subject) -> &'static [&'static str] {
    match subject {
        Subject::Chinese => CHINESE_TAGS,
        Subject::English => ENGLISH_TAGS,
        Subject::Physics => PHYSICS_TAGS,
        Subject::Chemistry => CHEMISTRY_TAGS,
        Subject::Biology => BIOLOGY_TAGS,
        Subject::History => HISTORY_TAGS,
        Subject::Geography => GEOGRAPHY_TAGS,
        Subject::Politics => POLITICS_TAGS,
        Subject::Math | Subject::Other => &[],
    }
}

fn listing_line(subject: Subject, tags: &[&str]) -> String {
    format!("{}：{}", subject.label(), tags.join("、"))
}

/// The tag-listing block interpolated into the analyze prompt. A known
/// subject gets its own catalogue (math filtered by grade); an unknown or
/// absent subject gets a combined preview of every subject's tags so the
/// model can both classify and tag.
pub fn tag_listing(subject: Option<Subject>, grade: Option<Grade>) -> String {
    match subject {
        Some(Subject::Math) => listing_line(Subject::Math, &math_tags(grade)),
        Some(subject) if subject != Subject::Other => {
            listing_line(subject, subject_tags(subject))
        }
        _ => {
            let mut lines = vec![listing_line(Subject::Math, &math_tags(None))];
            for subject in Subject::all().iter().copied() {
                if subject == Subject::Math || subject == Subject::Other {
                    continue;
                }
                lines.push(listing_line(subject, subject_tags(subject)));
            }
            lines.join("\n")
        }
    }
}
