use clap::Parser;
use opfmeta::{Contributor, OpfError, Package, Result};

/// 📦 OpfMeta - OPF元数据提取工具
#[derive(Parser)]
#[command(name = "opfmeta")]
#[command(about = "一个用于提取OPF包元数据的Rust工具")]
#[command(version)]
struct Args {
    /// OPF文件路径
    #[arg(help = "要解析的OPF文件路径")]
    opf_file: String,

    /// 详细输出模式
    #[arg(short, long, help = "显示详细信息")]
    verbose: bool,

    /// 显示渲染属性
    #[arg(short, long, help = "显示rendition渲染属性")]
    rendition: bool,

    /// 输出格式
    #[arg(long, value_enum, default_value = "text", help = "元数据的输出格式")]
    format: OutputFormat,
}

/// 元数据输出格式
#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    /// 人类可读的文本格式
    Text,
    /// YAML格式
    Yaml,
}

fn main() {
    let args = Args::parse();

    match process_opf(&args.opf_file, args.verbose, args.rendition, &args.format) {
        Ok(_) => {
            if matches!(args.format, OutputFormat::Text) {
                println!("\n🎉 OPF元数据提取完成！");
            }
        }
        Err(e) => eprintln!("❌ 错误: {}", e),
    }
}

fn process_opf(path: &str, verbose: bool, show_rendition: bool, format: &OutputFormat) -> Result<()> {
    let package = Package::from_path(path)?;
    let metadata = package.parse_metadata();

    if let OutputFormat::Yaml = format {
        let yaml = serde_yml::to_string(&metadata)
            .map_err(|e| OpfError::SerializeError(e.to_string()))?;
        print!("{}", yaml);
        return Ok(());
    }

    println!("📦 OpfMeta - OPF元数据提取工具");
    println!("正在解析OPF文件: {}", path);

    println!("\n📖 包信息:");
    match package.version() {
        Some(version) => println!("  EPUB版本: {}", version),
        None => println!("  EPUB版本: 未声明"),
    }
    if verbose {
        for (key, value) in package.attributes() {
            println!("  package属性: {} = {}", key, value);
        }
    }

    println!("\n📚 基本信息:");
    match &metadata.title {
        Some(title) => println!("  标题: {}", title),
        None => println!("  标题: (未找到)"),
    }
    match &metadata.identifier {
        Some(identifier) => println!("  唯一标识符: {}", identifier),
        None => println!("  唯一标识符: (未找到)"),
    }

    println!("\n👥 贡献者 (共{}人):", metadata.contributor_count());
    display_contributor_list("作者", &metadata.authors);
    display_contributor_list("译者", &metadata.translators);
    display_contributor_list("美术", &metadata.artists);
    display_contributor_list("编辑", &metadata.editors);
    display_contributor_list("插画师", &metadata.illustrators);
    display_contributor_list("上色师", &metadata.colorists);
    display_contributor_list("朗读者", &metadata.narrators);
    display_contributor_list("出版者", &metadata.publishers);
    display_contributor_list("其他贡献者", &metadata.contributors);

    if show_rendition {
        println!("\n🖼️  渲染属性:");
        let rendition = &metadata.rendition;
        match rendition.layout {
            Some(layout) => println!("  布局: {}", layout.as_str()),
            None => println!("  布局: (未设置)"),
        }
        match rendition.flow {
            Some(flow) => println!("  翻页: {}", flow.as_str()),
            None => println!("  翻页: (未设置)"),
        }
        match rendition.orientation {
            Some(orientation) => println!("  方向: {}", orientation.as_str()),
            None => println!("  方向: (未设置)"),
        }
        match rendition.spread {
            Some(spread) => println!("  跨页: {}", spread.as_str()),
            None => println!("  跨页: (未设置)"),
        }
        match &rendition.viewport {
            Some(viewport) => println!("  视口: {}", viewport),
            None => println!("  视口: (未设置)"),
        }
    }

    Ok(())
}

/// 显示某一分类桶中的贡献者列表
fn display_contributor_list(label: &str, contributors: &[Contributor]) {
    if contributors.is_empty() {
        return;
    }

    println!("  {}:", label);
    for (i, contributor) in contributors.iter().enumerate() {
        let mut info = format!("    {}. {}", i + 1, contributor.name);
        if let Some(role) = &contributor.role {
            info.push_str(&format!(" ({})", role));
        }
        if let Some(sort_as) = &contributor.sort_as {
            info.push_str(&format!(" [排序: {}]", sort_as));
        }
        println!("{}", info);
    }
}
