/// Docker 相关常量
pub mod docker {
    /// docker 命令
    pub const DOCKER_BIN: &str = "docker";

    /// 独立的 docker-compose 命令
    pub const COMPOSE_BIN: &str = "docker-compose";

    /// 仅输出容器名称的格式模板
    pub const NAMES_FORMAT: &str = "{{.Names}}";
}

/// Git 相关常量
pub mod git {
    pub const GIT_BIN: &str = "git";

    /// 分支输出为空（detached HEAD 等）时的返回值
    pub const UNKNOWN_BRANCH: &str = "unknown";

    /// 项目维度查询失败时的返回值
    pub const PROJECT_BRANCH_ERROR: &str = "error";

    /// 服务维度查询失败时的返回值，用来区分项目路径无效
    pub const SERVICE_BRANCH_ERROR: &str = "not a repo";
}

/// 超时时间（秒）
pub mod timeout {
    /// 容器列表查询超时时间
    pub const DOCKER_QUERY_TIMEOUT: u64 = 10;

    /// 容器启动/停止超时时间
    pub const DOCKER_ACTION_TIMEOUT: u64 = 120;

    /// git 分支查询超时时间
    pub const GIT_TIMEOUT: u64 = 5;
}

/// HTTP 服务相关常量
pub mod server {
    /// 默认只监听本机
    pub const DEFAULT_HOST: &str = "127.0.0.1";

    pub const DEFAULT_PORT: u16 = 9000;

    /// 端口环境变量
    pub const PORT_ENV: &str = "PORT";

    pub const DEFAULT_PUBLIC_DIR: &str = "public";

    pub const DEFAULT_COLLECTIONS_DIR: &str = "postman-collections";

    /// 环境文件后缀，集合列表需要排除
    pub const ENVIRONMENT_FILE_SUFFIX: &str = ".postman_environment.json";
}

/// 配置文件相关常量
pub mod config {
    /// 按优先级查找的配置文件名
    pub const CONFIG_FILE_NAMES: &[&str] = &["dev-portal.toml", ".dev-portal.toml"];

    pub const DEFAULT_CONFIG_FILE: &str = "dev-portal.toml";

    /// 默认项目根目录，每个栈对应其中一个子目录
    pub const DEFAULT_PROJECTS_ROOT: &str = "..";
}

/// 内置的栈定义: (id, 显示名称, 成员容器)
pub const DEFAULT_STACKS: &[(&str, &str, &[&str])] = &[
    (
        "vote",
        "Vote",
        &[
            "vote-ui",
            "vote-ui-vue",
            "vote-ui-react",
            "vote-ui-angular",
            "vote-api",
            "vote-db",
        ],
    ),
    (
        "freg",
        "FReg",
        &["freg-frontend", "freg-react-frontend", "freg-api", "freg-db"],
    ),
    (
        "family-tree",
        "Family Tree",
        &[
            "family-tree-react-frontend",
            "family-tree-api-java",
            "family-tree-api-node",
            "family-tree-api-quarkus",
            "family-tree-db",
            "family-tree-svg",
        ],
    ),
    (
        "movies",
        "Movies",
        &[
            "movies-react",
            "movies-vue",
            "movies-angular",
            "movies-wireframe",
            "movies-api",
            "movies-db",
            "imdb-db",
        ],
    ),
    (
        "feepay",
        "Fee & Pay",
        &[
            "ccpay-bubble",
            "ccpay-payment-api",
            "ccpay-db",
            "rse-idam-simulator",
            "ccd-api-mock",
            "s2s-mock",
            "rabbitmq",
        ],
    ),
];
