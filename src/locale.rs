use std::env;

/// Language of every user-facing line, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    English,
    Russian,
}

impl Lang {
    /// Accepts `en`, `ru` and `auto` (case-insensitive). `auto` detects from the host.
    pub fn from_code(code: &str) -> Option<Lang> {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Lang::English),
            "ru" | "russian" => Some(Lang::Russian),
            "auto" => Some(Lang::detect()),
            _ => None,
        }
    }

    /// Reads the host's default language from the usual locale variables.
    pub fn detect() -> Lang {
        let tag = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|val| !val.is_empty())
            .unwrap_or_default();
        Lang::from_tag(&tag)
    }

    fn from_tag(tag: &str) -> Lang {
        if tag.to_lowercase().starts_with("ru") {
            Lang::Russian
        } else {
            Lang::English
        }
    }
}

/// Keys of the message catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    BannerHint,
    Help,
    UnknownCommand,
    ExecError,
    UsageCat,
    UsageRm,
    UsageMkdir,
    UsageTouch,
    UsageEcho,
    UsageMv,
    UsageFind,
    UsageWrite,
    AlreadyAtRoot,
    NoPreviousDir,
    ReturnedTo,
    AccessDenied,
    AccessDeniedBare,
    DirNotFound,
    FileNotFound,
    SourceNotFound,
    ParentNotFound,
    ReadDirError,
    DirEmpty,
    EntryAccessDenied,
    EntryError,
    FileTruncated,
    ReadError,
    DirNotEmpty,
    Deleted,
    DeleteError,
    DirExists,
    DirCreated,
    DirCreateError,
    FileExists,
    FileCreated,
    FileCreateError,
    Moved,
    MoveTo,
    MoveError,
    Searching,
    SearchInterrupted,
    TextWritten,
    WriteError,
    HistoryEmpty,
    HistoryHeader,
    RebootAttempt,
    RebootSent,
    RebootRoot,
    RebootStandard,
    MethodFailed,
    RebootAllFailed,
    RebootHint,
    RebootDisabled,
}

const HELP_RU: &str = "Доступные команды:
pwd        - Показать текущую директорию
ls/dir     - Список файлов
cd [dir]   - Сменить директорию
cat [file] - Прочитать файл
rm [file]  - Удалить файл
mkdir [dir]- Создать директорию
touch [file]- Создать пустой файл
echo [text]- Вывести текст
mv [src] [dest] - Переместить/переименовать файл
clear      - Очистить экран
find [name]- Найти файл
date       - Показать текущую дату/время
write [file] \"[text]\" - Записать текст в файл
history    - Показать истории команд
back       - Вернуться к предыдущей директории
bkuzn      - Принудительная перезагрузка устройства";

const HELP_EN: &str = "Available commands:
pwd        - Show current directory
ls/dir     - List files
cd [dir]   - Change directory
cat [file] - Read file
rm [file]  - Remove file
mkdir [dir]- Create directory
touch [file]- Create empty file
echo [text]- Output text
mv [src] [dest] - Move/rename file
clear      - Clear screen
find [name]- Find file
date       - Show current date/time
write [file] \"[text]\" - Write text to file
history    - Show command history
back       - Go back to previous directory
bkuzn      - Force reboot device";

impl Msg {
    /// `(russian, english)`
    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::BannerHint => ("Введите 'help' для списка команд", "Type 'help' for command list"),
            Msg::Help => (HELP_RU, HELP_EN),
            Msg::UnknownCommand => ("Неизвестная команда: ", "Unknown command: "),
            Msg::ExecError => ("Ошибка выполнения команды '", "Error executing command '"),
            Msg::UsageCat => ("Использование: cat <имя_файла>", "Usage: cat <filename>"),
            Msg::UsageRm => ("Использование: rm <имя_файла>", "Usage: rm <filename>"),
            Msg::UsageMkdir => ("Использование: mkdir <директория>", "Usage: mkdir <directory>"),
            Msg::UsageTouch => ("Использование: touch <имя_файла>", "Usage: touch <filename>"),
            Msg::UsageEcho => ("Использование: echo <текст>", "Usage: echo <text>"),
            Msg::UsageMv => ("Использование: mv <источник> <назначение>", "Usage: mv <source> <destination>"),
            Msg::UsageFind => ("Использование: find <шаблон>", "Usage: find <pattern>"),
            Msg::UsageWrite => ("Использование: write имя_файла \"текст\"", "Usage: write filename \"text\""),
            Msg::AlreadyAtRoot => ("Уже в корневой директории", "Already in root directory"),
            Msg::NoPreviousDir => ("Нет предыдущей директории", "No previous directory"),
            Msg::ReturnedTo => ("Вернулись в: ", "Returned to: "),
            Msg::AccessDenied => ("Доступ запрещен: ", "Access denied: "),
            Msg::AccessDeniedBare => ("Доступ запрещен", "Access denied"),
            Msg::DirNotFound => ("Директория не найдена: ", "Directory not found: "),
            Msg::FileNotFound => ("Файл не найден: ", "File not found: "),
            Msg::SourceNotFound => ("Исходный файл не найден: ", "Source file not found: "),
            Msg::ParentNotFound => ("Родительская директория не найдена: ", "Parent directory not found: "),
            Msg::ReadDirError => ("Ошибка чтения директории", "Error reading directory"),
            Msg::DirEmpty => ("Директория пуста", "Directory is empty"),
            Msg::EntryAccessDenied => (" (доступ запрещен)", " (access denied)"),
            Msg::EntryError => (" (ошибка)", " (error)"),
            Msg::FileTruncated => ("... (файл обрезан, слишком большой)", "... (file truncated, too large)"),
            Msg::ReadError => ("Ошибка чтения: ", "Read error: "),
            Msg::DirNotEmpty => ("Нельзя удалить: Директория не пуста", "Cannot remove: Directory not empty"),
            Msg::Deleted => ("Удалено: ", "Deleted: "),
            Msg::DeleteError => ("Ошибка удаления: ", "Delete error: "),
            Msg::DirExists => ("Директория уже существует: ", "Directory already exists: "),
            Msg::DirCreated => ("Директория создана: ", "Directory created: "),
            Msg::DirCreateError => ("Ошибка создания директории: ", "Error creating directory: "),
            Msg::FileExists => ("Файл уже существует: ", "File already exists: "),
            Msg::FileCreated => ("Файл создан: ", "File created: "),
            Msg::FileCreateError => ("Ошибка создания файла: ", "Error creating file: "),
            Msg::Moved => ("Перемещено: ", "Moved: "),
            Msg::MoveTo => (" в ", " to "),
            Msg::MoveError => ("Ошибка перемещения: ", "Error moving: "),
            Msg::Searching => ("Поиск файлов содержащих '", "Searching for files containing '"),
            Msg::SearchInterrupted => ("Поиск прерван", "Search interrupted"),
            Msg::TextWritten => ("Текст записан в файл: ", "Text written to file: "),
            Msg::WriteError => ("Ошибка записи: ", "Write error: "),
            Msg::HistoryEmpty => ("История команд пуста", "Command history is empty"),
            Msg::HistoryHeader => ("История команд:", "Command history:"),
            Msg::RebootAttempt => ("Попытка перезагрузки устройства...", "Attempting to reboot device..."),
            Msg::RebootSent => ("Команда перезагрузки отправлена успешно", "Reboot command sent successfully"),
            Msg::RebootRoot => ("Команда перезагрузки через root выполнена", "Root reboot command executed"),
            Msg::RebootStandard => ("Стандартная команда перезагрузки выполнена", "Standard reboot command executed"),
            Msg::MethodFailed => ("Метод {} не удался: ", "Method {} failed: "),
            Msg::RebootAllFailed => ("Все методы перезагрузки не удались: ", "All reboot methods failed: "),
            Msg::RebootHint => (
                "Устройство, вероятно, не рутировано или приложение не подписано системным сертификатом",
                "Device is probably not rooted or app not signed with system certificate",
            ),
            Msg::RebootDisabled => ("перезагрузка отключена в конфигурации", "reboot is disabled by configuration"),
        }
    }
}

/// Message catalogue bound to one language.
#[derive(Debug, Clone, Copy)]
pub struct Messages {
    lang: Lang,
}

impl Messages {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn get(&self, key: Msg) -> &'static str {
        let (ru, en) = key.pair();
        match self.lang {
            Lang::Russian => ru,
            Lang::English => en,
        }
    }

    /// Message followed directly by its subject, e.g. `File not found: a.txt`.
    pub fn with(&self, key: Msg, subject: impl std::fmt::Display) -> String {
        format!("{}{}", self.get(key), subject)
    }

    /// `Method N failed: ` with the strategy's 1-based position filled in.
    pub fn method_failed(&self, index: usize) -> String {
        self.get(Msg::MethodFailed).replacen("{}", &index.to_string(), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_detection() {
        assert_eq!(Lang::from_tag("ru_RU.UTF-8"), Lang::Russian);
        assert_eq!(Lang::from_tag("en_US.UTF-8"), Lang::English);
        assert_eq!(Lang::from_tag(""), Lang::English);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Lang::from_code("RU"), Some(Lang::Russian));
        assert_eq!(Lang::from_code("en"), Some(Lang::English));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_pair_selection() {
        let en = Messages::new(Lang::English);
        let ru = Messages::new(Lang::Russian);
        assert_eq!(en.get(Msg::DirEmpty), "Directory is empty");
        assert_eq!(ru.get(Msg::DirEmpty), "Директория пуста");
        assert_eq!(en.with(Msg::FileNotFound, "a.txt"), "File not found: a.txt");
        assert_eq!(en.method_failed(2), "Method 2 failed: ");
        assert_eq!(ru.method_failed(3), "Метод 3 не удался: ");
    }
}
