//! Per-locale phrase tables
//!
//! Every user-facing string the composer emits lives here. Placeholders use
//! `{name}` syntax and are filled by [`fill`].

use hazard::HazardCategory;
use spatial::{Corridor, DistanceBand, Heading, HorizontalZone, Urgency, VerticalZone};

/// Static phrase table for one locale
#[derive(Debug)]
pub struct Templates {
    pub title: &'static str,
    pub walkable_header: &'static str,
    /// `{corridor}`, `{state}`, `{clearance}`
    pub corridor_line: &'static str,
    pub corridors: [&'static str; 3],
    pub blocked: &'static str,
    pub open: &'static str,
    /// `{heading}`
    pub heading_line: &'static str,
    pub headings: [&'static str; 4],

    pub critical_header: &'static str,
    pub high_header: &'static str,
    pub medium_header: &'static str,
    pub safe_header: &'static str,
    pub clear_scene: &'static str,
    /// `{label}`, `{confidence}`, `{zone}`, `{vertical}`, `{meters}`, `{band}`,
    /// `{category}`, `{urgency}`, `{action}`
    pub item_line: &'static str,

    pub zones: [&'static str; 7],
    pub instructions: [&'static str; 7],
    pub verticals: [&'static str; 4],
    pub bands: [&'static str; 5],
    pub urgencies: [&'static str; 4],
    pub categories: [&'static str; 5],

    /// `{words}`
    pub closing: &'static str,

    pub query_title: &'static str,
    /// `{question}`
    pub query_question: &'static str,
    pub query_scene_header: &'static str,
    pub query_no_frame: &'static str,
    /// `{words}`
    pub query_closing: &'static str,
}

impl Templates {
    pub fn corridor(&self, corridor: Corridor) -> &'static str {
        let idx = match corridor {
            Corridor::Left => 0,
            Corridor::Center => 1,
            Corridor::Right => 2,
        };
        self.corridors[idx]
    }

    pub fn heading(&self, heading: Heading) -> &'static str {
        let idx = match heading {
            Heading::Straight => 0,
            Heading::Left => 1,
            Heading::Right => 2,
            Heading::Careful => 3,
        };
        self.headings[idx]
    }

    fn zone_index(zone: HorizontalZone) -> usize {
        match zone {
            HorizontalZone::FarLeftEdge => 0,
            HorizontalZone::Left => 1,
            HorizontalZone::SlightlyLeft => 2,
            HorizontalZone::Ahead => 3,
            HorizontalZone::SlightlyRight => 4,
            HorizontalZone::Right => 5,
            HorizontalZone::FarRightEdge => 6,
        }
    }

    pub fn zone(&self, zone: HorizontalZone) -> &'static str {
        self.zones[Self::zone_index(zone)]
    }

    pub fn instruction(&self, zone: HorizontalZone) -> &'static str {
        self.instructions[Self::zone_index(zone)]
    }

    pub fn vertical(&self, zone: VerticalZone) -> &'static str {
        let idx = match zone {
            VerticalZone::Ground => 0,
            VerticalZone::WaistToChest => 1,
            VerticalZone::Head => 2,
            VerticalZone::Overhead => 3,
        };
        self.verticals[idx]
    }

    pub fn band(&self, band: DistanceBand) -> &'static str {
        let idx = match band {
            DistanceBand::VeryClose => 0,
            DistanceBand::Close => 1,
            DistanceBand::Medium => 2,
            DistanceBand::Far => 3,
            DistanceBand::VeryFar => 4,
        };
        self.bands[idx]
    }

    pub fn urgency(&self, urgency: Urgency) -> &'static str {
        let idx = match urgency {
            Urgency::Low => 0,
            Urgency::Medium => 1,
            Urgency::High => 2,
            Urgency::Critical => 3,
        };
        self.urgencies[idx]
    }

    pub fn category(&self, category: HazardCategory) -> &'static str {
        let idx = match category {
            HazardCategory::MovingVehicle => 0,
            HazardCategory::LivingBeing => 1,
            HazardCategory::PathBlocker => 2,
            HazardCategory::PotentialHazard => 3,
            HazardCategory::GeneralObject => 4,
        };
        self.categories[idx]
    }
}

/// Replace each `{key}` in `template` with its value
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in values {
        out = out.replace(&format!("{{{}}}", key), value);
    }
    out
}

pub static EN: Templates = Templates {
    title: "NAVIGATION ANALYSIS FOR A VISUALLY IMPAIRED PEDESTRIAN",
    walkable_header: "WALKABLE SPACE:",
    corridor_line: "- {corridor}: {state}, clearance about {clearance} m",
    corridors: ["Left path", "Center path", "Right path"],
    blocked: "blocked",
    open: "open",
    heading_line: "Recommended heading: {heading}",
    headings: [
        "continue straight ahead",
        "move to the left, it is clearer",
        "move to the right, it is clearer",
        "proceed carefully, obstacles detected",
    ],

    critical_header: "CRITICAL DANGERS - IMMEDIATE ATTENTION:",
    high_header: "HIGH PRIORITY - PATH OBSTACLES:",
    medium_header: "MEDIUM PRIORITY:",
    safe_header: "OTHER OBJECTS (SAFE):",
    clear_scene: "NO OBSTACLES DETECTED: the path ahead appears clear.",
    item_line: "- {label} ({confidence}% confidence): {zone}, {vertical}, about {meters} m ({band}), \
{category}, {urgency} urgency. Action: {action}",

    zones: [
        "far left edge",
        "left side",
        "slightly left of center",
        "directly ahead",
        "slightly right of center",
        "right side",
        "far right edge",
    ],
    instructions: [
        "sharp right turn available",
        "keep slightly right, about 1 step",
        "move right about 2-3 steps",
        "stop, then step left or right to pass",
        "move left about 2-3 steps",
        "keep slightly left, about 1 step",
        "sharp left turn available",
    ],
    verticals: ["ground level", "waist to chest height", "head height", "overhead"],
    bands: ["very close", "close", "medium distance", "far", "very far"],
    urgencies: ["low", "medium", "high", "immediate"],
    categories: [
        "moving vehicle",
        "living being",
        "path blocker",
        "potential hazard",
        "object",
    ],

    closing: "TASK:
Use the detection data above together with the camera image to guide the user.
- Reply in English in at most {words} words.
- State distances in meters exactly as given.
- Give one direction at a time, most urgent object first.
- Keep an encouraging, calm tone.
Example replies:
\"Car 2 meters directly ahead. Stop, then step right 2-3 steps.\"
\"Path is clear. Continue straight ahead.\"",

    query_title: "VOICE QUESTION FROM A VISUALLY IMPAIRED PEDESTRIAN",
    query_question: "Question: \"{question}\"",
    query_scene_header: "CURRENT SCENE:",
    query_no_frame: "No recent camera frame is available.",
    query_closing: "Answer the question in English in at most {words} words using the scene above. \
Mention distances in meters and keep an encouraging tone.",
};

pub static AR: Templates = Templates {
    title: "تحليل الملاحة لمشاة من ذوي الإعاقة البصرية",
    walkable_header: "المساحة الصالحة للمشي:",
    corridor_line: "- {corridor}: {state}، المسافة الخالية حوالي {clearance} متر",
    corridors: ["المسار الأيسر", "المسار الأوسط", "المسار الأيمن"],
    blocked: "مسدود",
    open: "مفتوح",
    heading_line: "الاتجاه المقترح: {heading}",
    headings: [
        "استمر إلى الأمام مباشرة",
        "تحرك إلى اليسار، فهو أوضح",
        "تحرك إلى اليمين، فهو أوضح",
        "تقدم بحذر، توجد عوائق",
    ],

    critical_header: "مخاطر حرجة - انتباه فوري:",
    high_header: "أولوية عالية - عوائق في المسار:",
    medium_header: "أولوية متوسطة:",
    safe_header: "أشياء أخرى (آمنة):",
    clear_scene: "لا توجد عوائق: يبدو المسار أمامك خاليًا.",
    item_line: "- {label} (ثقة {confidence}%): {zone}، {vertical}، على بعد حوالي {meters} متر ({band})، \
{category}، إلحاح {urgency}. الإجراء: {action}",

    zones: [
        "أقصى اليسار",
        "الجهة اليسرى",
        "يسار المنتصف قليلًا",
        "أمامك مباشرة",
        "يمين المنتصف قليلًا",
        "الجهة اليمنى",
        "أقصى اليمين",
    ],
    instructions: [
        "يمكنك الانعطاف يمينًا بحدة",
        "ابقَ يمينًا قليلًا، حوالي خطوة واحدة",
        "تحرك يمينًا حوالي 2-3 خطوات",
        "توقف، ثم تنحَّ يسارًا أو يمينًا للمرور",
        "تحرك يسارًا حوالي 2-3 خطوات",
        "ابقَ يسارًا قليلًا، حوالي خطوة واحدة",
        "يمكنك الانعطاف يسارًا بحدة",
    ],
    verticals: ["مستوى الأرض", "بين الخصر والصدر", "مستوى الرأس", "فوق الرأس"],
    bands: ["قريب جدًا", "قريب", "مسافة متوسطة", "بعيد", "بعيد جدًا"],
    urgencies: ["منخفض", "متوسط", "عالٍ", "فوري"],
    categories: [
        "مركبة متحركة",
        "كائن حي",
        "عائق في المسار",
        "خطر محتمل",
        "شيء",
    ],

    closing: "المهمة:
استخدم بيانات الرصد أعلاه مع صورة الكاميرا لإرشاد المستخدم.
- أجب باللغة العربية بما لا يزيد عن {words} كلمة.
- اذكر المسافات بالأمتار كما وردت تمامًا.
- أعطِ اتجاهًا واحدًا في كل مرة، ابدأ بالعائق الأكثر إلحاحًا.
- حافظ على نبرة هادئة ومشجعة.
أمثلة على الردود:
\"سيارة على بعد 2 متر أمامك مباشرة. توقف، ثم تحرك يمينًا 2-3 خطوات.\"
\"المسار خالٍ. استمر إلى الأمام مباشرة.\"",

    query_title: "سؤال صوتي من أحد المشاة ذوي الإعاقة البصرية",
    query_question: "السؤال: \"{question}\"",
    query_scene_header: "المشهد الحالي:",
    query_no_frame: "لا توجد صورة حديثة من الكاميرا.",
    query_closing: "أجب عن السؤال باللغة العربية بما لا يزيد عن {words} كلمة اعتمادًا على المشهد أعلاه. \
اذكر المسافات بالأمتار وحافظ على نبرة مشجعة.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_every_occurrence() {
        let out = fill("{a} and {a} then {b}", &[("a", "x"), ("b", "y")]);
        assert_eq!(out, "x and x then y");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{missing}", &[("a", "x")]), "{missing}");
    }

    #[test]
    fn test_english_table_matches_spatial_phrases() {
        for zone in HorizontalZone::ALL {
            assert_eq!(EN.zone(zone), zone.phrase());
            assert_eq!(EN.instruction(zone), zone.instruction());
        }
        for heading in [Heading::Straight, Heading::Left, Heading::Right, Heading::Careful] {
            assert_eq!(EN.heading(heading), heading.phrase());
        }
        assert_eq!(EN.band(DistanceBand::Medium), DistanceBand::Medium.phrase());
        assert_eq!(EN.urgency(Urgency::Critical), Urgency::Critical.phrase());
        assert_eq!(
            EN.category(HazardCategory::PathBlocker),
            HazardCategory::PathBlocker.phrase()
        );
    }

    #[test]
    fn test_arabic_table_is_complete() {
        for zone in HorizontalZone::ALL {
            assert!(!AR.zone(zone).is_empty());
            assert!(!AR.instruction(zone).is_empty());
        }
        assert!(AR.closing.contains("{words}"));
        assert!(AR.item_line.contains("{meters}"));
    }
}
