//! 动物知识库
//!
//! 内置的濒危动物资料表，进程启动时构建一次，之后只读。
//! 按名称精确匹配查询，列表顺序即定义顺序。

use serde::Serialize;

/// 单个动物的资料
#[derive(Debug, Clone, Serialize)]
pub struct SubjectRecord {
    /// 物种简介
    pub description: &'static str,
    /// 保护级别（IUCN 等级的中文表述）
    pub status: &'static str,
    /// 野生种群数量估计
    pub population: &'static str,
    /// 主要威胁
    pub threats: &'static str,
    /// 保护措施
    pub conservation: &'static str,
}

/// 动物知识库
///
/// 名称到资料的只读映射。条目很少，顺序查找即可，
/// 同时天然保留定义顺序用于列表接口。
#[derive(Debug)]
pub struct Knowledge {
    entries: Vec<(&'static str, SubjectRecord)>,
}

impl Knowledge {
    /// 构建内置知识库
    pub fn builtin() -> Self {
        let entries = vec![
            (
                "大熊猫",
                SubjectRecord {
                    description: "大熊猫是中国的国宝，主要生活在四川、陕西和甘肃的山区竹林。",
                    status: "易危",
                    population: "约1864只野生大熊猫",
                    threats: "栖息地碎片化、气候变化、竹子开花",
                    conservation: "建立自然保护区、人工繁殖、国际合作",
                },
            ),
            (
                "东北虎",
                SubjectRecord {
                    description: "东北虎是世界上最大的猫科动物，主要分布在中国东北和俄罗斯远东地区。",
                    status: "濒危",
                    population: "约500只野生东北虎",
                    threats: "栖息地丧失、盗猎、猎物减少",
                    conservation: "反盗猎巡逻、栖息地恢复、跨国保护",
                },
            ),
            (
                "长江江豚",
                SubjectRecord {
                    description: "长江江豚是中国特有的淡水豚类，生活在长江中下游干流及洞庭湖、鄱阳湖。",
                    status: "极危",
                    population: "约1012头",
                    threats: "航运、污染、非法捕捞、水利工程",
                    conservation: "迁地保护、建立保护区、人工繁殖",
                },
            ),
        ];
        Self { entries }
    }

    /// 按名称精确查找动物资料
    ///
    /// 不做任何归一化或模糊匹配，名称必须与表中键完全一致。
    pub fn get(&self, name: &str) -> Option<&SubjectRecord> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, record)| record)
    }

    /// 按定义顺序返回所有动物名称
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// 知识库条目数
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
