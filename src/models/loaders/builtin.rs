//! 内置目录
//!
//! 与现有几个文档站点的文档列表保持一致，方便不写目录文件直接使用

use crate::error::CatalogError;
use crate::models::catalog::{Catalog, GroupSwitch};
use crate::models::descriptor::DocumentDescriptor;

/// 内置目录名称
pub const BUILTIN_NAMES: &[&str] = &["frontend", "javascript", "terraform"];

/// 按名称取内置目录
pub fn builtin(name: &str) -> Result<Catalog, CatalogError> {
    match name {
        "frontend" => Ok(frontend_interview()),
        "javascript" => Ok(javascript_interview()),
        "terraform" => Ok(terraform_tutorial()),
        other => Err(CatalogError::UnknownBuiltin {
            name: other.to_string(),
        }),
    }
}

/// 前端面试题：每种语言一篇
pub fn frontend_interview() -> Catalog {
    Catalog::builder()
        .group(
            "ko",
            [DocumentDescriptor::new(
                "frontend",
                "frontend_interview_ko.md",
                "프론트엔드 엔지니어 인터뷰 - 웹 기술 질문과 답변",
            )],
        )
        .group(
            "en",
            [DocumentDescriptor::new(
                "frontend",
                "frontend_interview_en.md",
                "Frontend Engineer Interview - Web Technology Questions and Answers",
            )],
        )
        .default_group("ko")
        .build()
}

const JAVASCRIPT_PARTS: &[(&str, &str, &str)] = &[
    ("part1", "기본 개념", "Basic Concepts"),
    ("part2", "함수와 스코프", "Functions and Scope"),
    ("part3", "객체와 프로토타입", "Objects and Prototypes"),
    ("part4", "비동기 프로그래밍", "Asynchronous Programming"),
    ("part5", "ES6+ 기능", "ES6+ Features"),
    ("part6", "DOM과 브라우저", "DOM and Browser"),
    ("part7", "성능과 최적화", "Performance and Optimization"),
    ("part8", "보안", "Security"),
    ("practical", "실전 문제", "Practical Problems"),
    ("trends", "최신 트렌드", "Latest Trends"),
];

/// JavaScript 面试题：韩/英两组，各十篇，切换语言时保持当前篇目
pub fn javascript_interview() -> Catalog {
    let ko = JAVASCRIPT_PARTS.iter().map(|(id, ko_topic, _)| {
        DocumentDescriptor::new(
            *id,
            format!("javascript_interview_ko_{}.md", id),
            format!("JavaScript 개발자 인터뷰 질문 ({})", ko_topic),
        )
    });
    let en = JAVASCRIPT_PARTS.iter().map(|(id, _, en_topic)| {
        DocumentDescriptor::new(
            *id,
            format!("en/javascript_interview_en_{}.md", id),
            format!("JavaScript Developer Interview Questions ({})", en_topic),
        )
    });

    Catalog::builder()
        .group("ko", ko)
        .group("en", en)
        .default_group("ko")
        .group_switch(GroupSwitch::KeepIndex)
        .build()
}

const TERRAFORM_CHAPTERS: &[(&str, &str)] = &[
    ("01_테라폼_소개.md", "테라폼 소개"),
    ("02_테라폼_설치_및_기본_명령어.md", "테라폼 설치 및 기본 명령어"),
    ("03_테라폼_구성_파일_및_HCL_문법.md", "테라폼 구성 파일 및 HCL 문법"),
    ("04_테라폼_상태_관리_및_백엔드.md", "테라폼 상태 관리 및 백엔드"),
    ("05_테라폼_모듈_및_재사용성.md", "테라폼 모듈 및 재사용성"),
    ("06_테라폼_변수_출력_및_데이터_관리.md", "테라폼 변수 출력 및 데이터 관리"),
    ("07_테라폼_프로비저너_및_프로비저닝.md", "테라폼 프로비저너 및 프로비저닝"),
    ("08_테라폼_워크스페이스_및_환경_관리.md", "테라폼 워크스페이스 및 환경 관리"),
    ("09_테라폼_고급_기능_및_모범_사례.md", "테라폼 고급 기능 및 모범 사례"),
    ("10_React_Firebase_Terraform_활용.md", "React Firebase Terraform 활용"),
];

/// Terraform 教程：单一分组，按章节前后翻页
pub fn terraform_tutorial() -> Catalog {
    let chapters = TERRAFORM_CHAPTERS
        .iter()
        .enumerate()
        .map(|(i, (file, title))| DocumentDescriptor::new(i as u64 + 1, *file, *title));

    Catalog::builder().group("ko", chapters).build()
}
