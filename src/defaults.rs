//! Built-in prompt texts shipped with the application.

use crate::prompt::{PromptEntry, PromptKey, PromptTable};

const GRAPH_SCHEMA: &str = r#"{
"vertexlabels": [
    {
    "id": 1,
    "name": "person",
    "id_strategy": "PRIMARY_KEY",
    "primary_keys": ["name"],
    "properties": ["name", "age", "occupation"]
    },
    {
    "id": 2,
    "name": "webpage",
    "id_strategy": "PRIMARY_KEY",
    "primary_keys": ["name"],
    "properties": ["name", "url"]
    }
],
"edgelabels": [
    {
    "id": 1,
    "name": "roommate",
    "source_label": "person",
    "target_label": "person",
    "properties": ["date"]
    },
    {
    "id": 2,
    "name": "link",
    "source_label": "webpage",
    "target_label": "person",
    "properties": []
    }
]
}
"#;

const EXTRACT_GRAPH_PROMPT_EN: &str = "## Main Task
Given the following graph schema and a piece of text, analyze the text and extract the information that fits the schema, formatted as vertices and edges.

## Rules
1. Don't extract property fields that do not exist in the given schema.
2. Keep extracted property values in the type the schema declares (e.g. 'age' is a number).
3. With multiple primary keys, build the vertex id as vertexLabelID:pk1!pk2!pk3.
4. Output a list of JSON objects, each one a vertex or an edge.
";

const EXTRACT_GRAPH_PROMPT_ZH: &str = "## 主要任务
根据给定的图谱模式和一段文本，分析文本并抽取符合模式结构的信息，整理成顶点和边。

## 规则
1. 不要抽取模式中不存在的属性字段。
2. 抽取的属性值类型需与模式一致（例如 'age' 为数字）。
3. 存在多个主键时，顶点 ID 的生成方式为 vertexLabelID:pk1!pk2!pk3。
4. 输出为 JSON 对象列表，每个对象表示一个顶点或一条边。
";

const ANSWER_PROMPT_EN: &str = "You are an expert in the fields of knowledge graphs and natural language processing.

Please provide precise and accurate answers based on the following context information, which is sorted in order of importance from high to low, without using any fabricated knowledge.

Given the context information and without using fictive knowledge,
answer the following query in a concise and professional manner.
Please write your answer using Markdown with MathJax syntax, where inline math is wrapped with `$...$`

Context information is below.
---------------------
{context_str}
---------------------
Query: {query_str}
Answer:
";

const ANSWER_PROMPT_ZH: &str = "你是知识图谱和自然语言处理领域的专家。

请根据以下按重要性从高到低排序的上下文信息，给出精确、准确的回答，不要使用任何编造的知识。

请以简洁、专业的方式回答下面的问题，使用 Markdown 书写，行内公式用 `$...$` 包裹。

上下文信息如下。
---------------------
{context_str}
---------------------
问题：{query_str}
回答：
";

const KEYWORDS_EXTRACT_PROMPT_EN: &str = "Instructions:
Please perform the following tasks on the text below:
1. Extract up to {max_keywords} keywords from the text, ignoring stop words.
2. Keep the original language of every keyword.
Output format:
KEYWORDS:keyword1,keyword2,...,keywordN

Text:
{question}
";

const KEYWORDS_EXTRACT_PROMPT_ZH: &str = "指令：
请对下面的文本完成以下任务：
1. 从文本中抽取最多 {max_keywords} 个关键词，忽略停用词。
2. 保持每个关键词的原始语言。
输出格式：
KEYWORDS:关键词1,关键词2,...,关键词N

文本：
{question}
";

const DOC_INPUT_TEXT_EN: &str = "Meet Sarah, a 30-year-old attorney, and her roommate, James, whom she's shared a home with since 2010.
James, in his professional life, works as a journalist. Additionally, Sarah is the proud owner of the website
www.sarahsplace.com, while James manages his own webpage, though the specific URL is not mentioned here.
";

const DOC_INPUT_TEXT_ZH: &str = "介绍一下 Sarah，她是一位 30 岁的律师，还有她的室友 James，他们从 2010 年起就一起合租。
James 的职业是记者。此外，Sarah 拥有网站 www.sarahsplace.com，而 James 也经营着自己的网页，不过这里没有提到具体的网址。
";

/// Default table for the consuming application. Keys without a shipped text
/// (`custom_rerank_info`, `text2gql_graph_schema`,
/// `gremlin_generate_prompt`) stay empty.
pub fn builtin() -> PromptTable {
    PromptTable::new()
        .with(PromptKey::GraphSchema, PromptEntry::new(GRAPH_SCHEMA, ""))
        .with(
            PromptKey::ExtractGraphPrompt,
            PromptEntry::new(EXTRACT_GRAPH_PROMPT_EN, EXTRACT_GRAPH_PROMPT_ZH),
        )
        .with(
            PromptKey::DefaultQuestion,
            PromptEntry::new("Tell me about Sarah.", "介绍一下 Sarah。"),
        )
        .with(
            PromptKey::AnswerPrompt,
            PromptEntry::new(ANSWER_PROMPT_EN, ANSWER_PROMPT_ZH),
        )
        .with(
            PromptKey::KeywordsExtractPrompt,
            PromptEntry::new(KEYWORDS_EXTRACT_PROMPT_EN, KEYWORDS_EXTRACT_PROMPT_ZH),
        )
        .with(
            PromptKey::DocInputText,
            PromptEntry::new(DOC_INPUT_TEXT_EN, DOC_INPUT_TEXT_ZH),
        )
}
