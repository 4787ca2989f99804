//! 用 shell 腳本模擬 python / pip / pytest 的假專案
#![cfg(unix)]

use anyhow::Result;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// 以 `fake-python -m venv <dir>` 呼叫；建立標記檔與 venv 內的假工具
const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python $*" >> calls.log
mkdir -p "$3/bin"
echo "home = /usr/bin" > "$3/pyvenv.cfg"
cat > "$3/bin/pip" <<'EOS'
#!/bin/sh
echo "pip $*" >> calls.log
case "$1" in
  freeze) cat installed.txt ;;
  list) cat outdated.txt ;;
esac
EOS
cat > "$3/bin/python" <<'EOS'
#!/bin/sh
echo "python $*" >> calls.log
printf 'alpha==2.0\nbeta==3.0\n' > installed.txt
: > outdated.txt
EOS
cat > "$3/bin/pytest" <<'EOS'
#!/bin/sh
echo "pytest $*" >> calls.log
exit 3
EOS
chmod +x "$3/bin/pip" "$3/bin/python" "$3/bin/pytest"
"#;

/// 在 root 寫入假直譯器、dev.toml 與 pip 要回傳的套件清單
pub fn write_fake_project(root: &Path) -> Result<()> {
    let interpreter = root.join("fake-python");
    std::fs::write(&interpreter, FAKE_PYTHON)?;
    std::fs::set_permissions(&interpreter, std::fs::Permissions::from_mode(0o755))?;
    std::fs::write(
        root.join("dev.toml"),
        format!(
            "[environment]\ninterpreter = \"{}\"\nplatform = \"unix\"\n\n[native_helper]\nenabled = false\n",
            interpreter.display()
        ),
    )?;
    std::fs::write(root.join("installed.txt"), "alpha==1.0\nbeta==1.0\n")?;
    std::fs::write(root.join("outdated.txt"), "alpha==1.0\nbeta==1.0\n")?;
    Ok(())
}

pub fn calls(root: &Path) -> Vec<String> {
    std::fs::read_to_string(root.join("calls.log"))
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}
