pub const SYSTEM_PROMPT: &str = "你是一位擅长用简单易懂的方式讲解复杂概念的专家。";

pub const QUICK_INTRO_HEADER: &str = "# 五分钟扫盲";
pub const DETAILED_HEADER: &str = "# 深入学习框架";

/// Single prompt covering both the primer and the learning framework.
pub fn combined_prompt(topic: &str) -> String {
    format!(
        r#"你是一位擅长教学的专家，请为主题 "{topic}" 生成以下两部分内容：

### **📌 第一部分：五分钟扫盲**
1. 它是什么？
- 简单介绍
2. 它为什么重要？
- 价值和影响
3. 它有哪些主要类型？
- 分类或组成部分
4. 它基本是怎么运作的？
- 运行原理
5. 用一个比喻/例子来理解
- 生活化的类比

### **📌 第二部分：学习框架**
1. 学习目标
- 入门 / 进阶 / 专家
2. 核心知识点
- 关键概念
3. 学习路径
- 逐步学习顺序
4. 推荐资源
- 课程 / 书籍 / 工具
5. 实践项目
- 练习 / 案例分析 / 高级应用

请用 **清晰、简洁** 的中文回答，确保通俗易懂！
"#
    )
}

pub fn quick_intro_prompt(topic: &str) -> String {
    format!(
        r#"你是一位擅长用简单易懂的方式讲解复杂概念的专家。
你的目标是让一个完全不懂 {topic} 这个领域的人 **在5分钟内明白它的核心概念**，就像在和朋友聊天一样！
请使用 **简单、直白、生活化的语言**，避免生硬的专业术语，并在最后提供一个贴近生活的比喻。

### **📌 1. 它是什么？（What is it?）**
- 用最简单的方式解释 {topic}，**不要长篇大论**，直接说重点。

### **📌 2. 它为什么重要？（Why is it important?）**
- **换个角度思考**，它为什么值得关心？它对你/公司/社会有什么影响？

### **📌 3. 它有哪些主要类型/构成？（Types/Classifications）**
- 这个东西有不同的种类吗？它的组成部分是什么？

### **📌 4. 它基本是怎么运作/处理的？（How does it work?）**
- **它的运行方式**、基本逻辑是什么？

### **📌 5. 用一个比喻/例子来理解？（Analogy/Example）**
- **用一个日常生活的例子**，让人一听就懂。

请用中文回答，确保内容通俗易懂。
"#
    )
}

pub fn detailed_prompt(topic: &str) -> String {
    format!(
        r#"## 2️⃣ **深入学习框架**
现在请为想要深入学习 {topic} 的用户提供一个完整的学习框架：

### **📌 学习目标**
- 入门级：掌握哪些基础知识和技能
- 进阶级：需要深入理解的核心概念
- 专家级：需要达到的专业水平

### **📌 核心知识点**
- 列出必须掌握的关键概念
- 重点难点分析

### **📌 学习路径**
- 推荐的学习顺序
- 重点书籍和课程推荐
- 实战项目建议

### **📌 推荐资源**
- 优质的在线课程（MOOC）
- 实用工具和平台
- 学习社区和论坛

### **📌 实践项目**
- 入门级实践项目
- 进阶案例分析
- 高级实战建议

请用中文回答，确保内容具体且实用。
"#
    )
}

/// Joins the two completions under their section headers, intro first.
pub fn combine_sections(quick_intro: &str, detailed: &str) -> String {
    format!("\n{QUICK_INTRO_HEADER}\n{quick_intro}\n\n{DETAILED_HEADER}\n{detailed}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPICS: &[&str] = &["区块链", "machine learning", "C++ {templates}", "\"quoted\"", "a"];

    #[test]
    fn test_every_prompt_contains_topic() {
        for topic in TOPICS {
            assert!(combined_prompt(topic).contains(topic));
            assert!(quick_intro_prompt(topic).contains(topic));
            assert!(detailed_prompt(topic).contains(topic));
        }
    }

    #[test]
    fn test_prompts_are_deterministic() {
        assert_eq!(combined_prompt("区块链"), combined_prompt("区块链"));
        assert_eq!(quick_intro_prompt("区块链"), quick_intro_prompt("区块链"));
        assert_ne!(quick_intro_prompt("区块链"), detailed_prompt("区块链"));
    }

    #[test]
    fn test_combine_sections_order() {
        let combined = combine_sections("INTRO", "FRAMEWORK");
        let intro_header = combined.find(QUICK_INTRO_HEADER).unwrap();
        let intro = combined.find("INTRO").unwrap();
        let detailed_header = combined.find(DETAILED_HEADER).unwrap();
        let framework = combined.find("FRAMEWORK").unwrap();
        assert!(intro_header < intro);
        assert!(intro < detailed_header);
        assert!(detailed_header < framework);
    }
}
