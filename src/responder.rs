//! 问答回复生成
//!
//! 对消息做小写化后按优先级依次匹配关键词集：问候语优先，
//! 之后是五类动物问题（介绍、状态、数量、威胁、保护措施），
//! 首个命中的规则生效。全部未命中时返回固定的默认回复。

use crate::knowledge::{Knowledge, SubjectRecord};

/// 问候语关键词，优先级最高，且不要求动物在知识库中
const GREETING_KEYWORDS: &[&str] = &["你好", "嗨", "hello", "hi"];

/// 默认回复，任何规则都未命中时返回
const DEFAULT_REPLY: &str = "我对濒危动物保护很感兴趣！你可以问我关于大熊猫、东北虎或长江江豚的信息。";

/// 问候语中没有动物标签时的占位称呼
const FALLBACK_SUBJECT: &str = "濒危动物";

/// 一条问答规则：关键词集 + 回复格式化函数
struct Rule {
    keywords: &'static [&'static str],
    format: fn(name: &str, record: &SubjectRecord) -> String,
}

/// 按优先级排列的动物问题规则表
///
/// 顺序即优先级，首个命中的规则生效。调整分类只需增删条目。
const RULES: &[Rule] = &[
    Rule {
        keywords: &["介绍", "是什么", "describe", "what"],
        format: |name, record| format!("{}：{}", name, record.description),
    },
    Rule {
        keywords: &["状态", "status", "保护级别"],
        format: |name, record| format!("{}的保护状态是：{}", name, record.status),
    },
    Rule {
        keywords: &["数量", "population", "有多少"],
        format: |name, record| format!("目前野生{}的数量约为：{}", name, record.population),
    },
    Rule {
        keywords: &["威胁", "threats", "危险"],
        format: |name, record| format!("{}面临的主要威胁包括：{}", name, record.threats),
    },
    Rule {
        keywords: &["保护", "conservation", "措施"],
        format: |name, record| format!("保护{}的主要措施有：{}", name, record.conservation),
    },
];

/// 生成一条回复
///
/// 纯函数：同样的消息、动物标签和知识库总是得到同样的回复，
/// 且不会失败。动物问题规则只在标签能在知识库中查到时生效，
/// 查不到时落到默认回复（默认回复本身已列出可用的动物名）。
pub fn respond(knowledge: &Knowledge, message: &str, subject: Option<&str>) -> String {
    let lowered = message.to_lowercase();

    if contains_any(&lowered, GREETING_KEYWORDS) {
        let name = subject.filter(|s| !s.is_empty()).unwrap_or(FALLBACK_SUBJECT);
        return format!("你好！我是{}的虚拟助手。有什么可以帮助你的吗？", name);
    }

    if let Some(name) = subject.filter(|s| !s.is_empty()) {
        if let Some(record) = knowledge.get(name) {
            for rule in RULES {
                if contains_any(&lowered, rule.keywords) {
                    return (rule.format)(name, record);
                }
            }
        }
    }

    DEFAULT_REPLY.to_string()
}

fn contains_any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knowledge() -> Knowledge {
        Knowledge::builtin()
    }

    #[test]
    fn describe_returns_description() {
        let kb = knowledge();
        for name in kb.names() {
            let record = kb.get(name).unwrap();
            let reply = respond(&kb, "请介绍一下", Some(name));
            assert_eq!(reply, format!("{}：{}", name, record.description));
        }
    }

    #[test]
    fn describe_matches_english_keyword() {
        let kb = knowledge();
        let reply = respond(&kb, "describe the panda", Some("大熊猫"));
        assert!(reply.contains("国宝"));
    }

    #[test]
    fn greeting_substring_intercepts_english_this() {
        let kb = knowledge();
        // "this" 包含 "hi"，子串匹配下问候语会先命中
        let reply = respond(&kb, "what is this", Some("大熊猫"));
        assert!(reply.starts_with("你好"));
    }

    #[test]
    fn population_reply_contains_estimate() {
        let kb = knowledge();
        for name in kb.names() {
            let record = kb.get(name).unwrap();
            let reply = respond(&kb, "它们还有多少数量？", Some(name));
            assert!(reply.contains(record.population));
        }
    }

    #[test]
    fn status_and_threats_and_conservation() {
        let kb = knowledge();
        assert_eq!(
            respond(&kb, "它的保护级别", Some("东北虎")),
            "东北虎的保护状态是：濒危"
        );
        assert_eq!(
            respond(&kb, "它面临什么威胁", Some("长江江豚")),
            "长江江豚面临的主要威胁包括：航运、污染、非法捕捞、水利工程"
        );
        assert_eq!(
            respond(&kb, "有哪些保护措施", Some("大熊猫")),
            "保护大熊猫的主要措施有：建立自然保护区、人工繁殖、国际合作"
        );
    }

    #[test]
    fn greeting_outranks_subject_rules() {
        let kb = knowledge();
        // 同时出现问候语和"介绍"关键词时，问候语优先
        let reply = respond(&kb, "你好，介绍一下", Some("大熊猫"));
        assert_eq!(reply, "你好！我是大熊猫的虚拟助手。有什么可以帮助你的吗？");
    }

    #[test]
    fn greeting_works_without_subject() {
        let kb = knowledge();
        let reply = respond(&kb, "hello", None);
        assert_eq!(reply, "你好！我是濒危动物的虚拟助手。有什么可以帮助你的吗？");
        // 空字符串标签与缺失等价
        let reply = respond(&kb, "嗨", Some(""));
        assert!(reply.contains("濒危动物"));
    }

    #[test]
    fn unknown_subject_falls_through_to_default() {
        let kb = knowledge();
        let reply = respond(&kb, "请介绍一下", Some("狮子"));
        assert_eq!(reply, DEFAULT_REPLY);
        let reply = respond(&kb, "数量有多少", None);
        assert_eq!(reply, DEFAULT_REPLY);
    }

    #[test]
    fn unmatched_message_returns_default() {
        let kb = knowledge();
        let reply = respond(&kb, "今天天气怎么样", Some("大熊猫"));
        assert_eq!(reply, DEFAULT_REPLY);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let kb = knowledge();
        let reply = respond(&kb, "HELLO", None);
        assert!(reply.starts_with("你好"));
    }

    #[test]
    fn rule_order_is_priority_order() {
        let kb = knowledge();
        // "介绍"排在"保护"之前，消息同时包含两类关键词时取前者
        let reply = respond(&kb, "介绍一下它的保护措施之前先说说它本身", Some("东北虎"));
        assert!(reply.starts_with("东北虎："));
    }
}
