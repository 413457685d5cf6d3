use std::collections::HashMap;
use std::sync::LazyLock;

/// Capability bits a file extension can carry. A file type may
/// combine bits — e.g. a static archive is both a `LinkLibrary` and, in
/// principle, `Resource`-copyable, though none of the builtin entries do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTypeFlags(u8);

impl FileTypeFlags {
    pub const NONE: FileTypeFlags = FileTypeFlags(0);
    pub const COMPILER: FileTypeFlags = FileTypeFlags(1 << 0);
    pub const ASSEMBLER: FileTypeFlags = FileTypeFlags(1 << 1);
    pub const HEADER: FileTypeFlags = FileTypeFlags(1 << 2);
    pub const LINK_LIBRARY: FileTypeFlags = FileTypeFlags(1 << 3);
    pub const LINK_FRAMEWORK: FileTypeFlags = FileTypeFlags(1 << 4);
    pub const RESOURCE: FileTypeFlags = FileTypeFlags(1 << 5);
    pub const APPLICATION: FileTypeFlags = FileTypeFlags(1 << 6);

    pub const fn contains(self, other: FileTypeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    const fn union(self, other: FileTypeFlags) -> FileTypeFlags {
        FileTypeFlags(self.0 | other.0)
    }
}

impl std::ops::BitOr for FileTypeFlags {
    type Output = FileTypeFlags;
    fn bitor(self, rhs: FileTypeFlags) -> FileTypeFlags {
        self.union(rhs)
    }
}

/// One catalog entry: the `lastKnownFileType` UTI Xcode expects plus the
/// capability flags the builder consults when deciding which build phase
/// (if any) a source file belongs to.
#[derive(Debug, Clone, Copy)]
pub struct FileTypeEntry {
    pub uti: &'static str,
    pub flags: FileTypeFlags,
}

/// Extension → catalog entry, covering the compiler/linker-relevant
/// extensions the project builder must recognize, plus a broader
/// supplemental extension table with no capability bits set beyond what
/// this table assigns (so they are never mistaken for `Compiler` inputs).
pub static FILE_TYPES: LazyLock<HashMap<&'static str, FileTypeEntry>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    let mut add = |ext: &'static str, uti: &'static str, flags: FileTypeFlags| {
        m.insert(ext, FileTypeEntry { uti, flags });
    };

    add("c", "sourcecode.c.c", FileTypeFlags::COMPILER);
    add("cc", "sourcecode.cpp.cpp", FileTypeFlags::COMPILER);
    add("cpp", "sourcecode.cpp.cpp", FileTypeFlags::COMPILER);
    add("cxx", "sourcecode.cpp.cpp", FileTypeFlags::COMPILER);
    add("m", "sourcecode.c.objc", FileTypeFlags::COMPILER);
    add("mm", "sourcecode.cpp.objcpp", FileTypeFlags::COMPILER);
    add("swift", "sourcecode.swift", FileTypeFlags::COMPILER);
    add("s", "sourcecode.asm", FileTypeFlags::ASSEMBLER);
    add("h", "sourcecode.c.h", FileTypeFlags::HEADER);
    add("hh", "sourcecode.cpp.h", FileTypeFlags::HEADER);
    add("hpp", "sourcecode.cpp.h", FileTypeFlags::HEADER);
    add("hxx", "sourcecode.cpp.h", FileTypeFlags::HEADER);
    add("ipp", "sourcecode.cpp.h", FileTypeFlags::HEADER);
    add("pch", "sourcecode.c.h", FileTypeFlags::HEADER);
    add("a", "archive.ar", FileTypeFlags::LINK_LIBRARY);
    add("dylib", "compiled.mach-o.dylib", FileTypeFlags::LINK_LIBRARY);
    add("tbd", "sourcecode.text-based-dylib-definition", FileTypeFlags::LINK_LIBRARY);
    add("framework", "wrapper.framework", FileTypeFlags::LINK_FRAMEWORK);
    add("xcframework", "wrapper.xcframework", FileTypeFlags::LINK_FRAMEWORK);
    add("png", "image.png", FileTypeFlags::RESOURCE);
    add("jpg", "image.jpeg", FileTypeFlags::RESOURCE);
    add("jpeg", "image.jpeg", FileTypeFlags::RESOURCE);
    add("gif", "image.gif", FileTypeFlags::RESOURCE);
    add("storyboard", "file.storyboard", FileTypeFlags::RESOURCE);
    add("xib", "file.xib", FileTypeFlags::RESOURCE);
    add("xcassets", "folder.assetcatalog", FileTypeFlags::RESOURCE);
    add("strings", "text.plist.strings", FileTypeFlags::RESOURCE);
    add("stringsdict", "text.plist.stringsdict", FileTypeFlags::RESOURCE);
    add("xcdatamodel", "wrapper.xcdatamodel", FileTypeFlags::RESOURCE);
    add("xcdatamodeld", "wrapper.xcdatamodeld", FileTypeFlags::RESOURCE);
    add("app", "wrapper.application", FileTypeFlags::APPLICATION);
    add("appex", "wrapper.app-extension", FileTypeFlags::APPLICATION);
    add("bundle", "wrapper.cfbundle", FileTypeFlags::RESOURCE);
    add("plist", "text.plist.xml", FileTypeFlags::RESOURCE);
    add("txt", "text", FileTypeFlags::RESOURCE);

    // Supplemental: recognized for lastKnownFileType purposes, no capability
    // bits beyond the table above, so unrecognized-but-common files still
    // get a UTI.
    add("css", "text.css", FileTypeFlags::NONE);
    add("d", "sourcecode.dtrace", FileTypeFlags::NONE);
    add("entitlements", "text.plist.entitlements", FileTypeFlags::NONE);
    add("gpx", "text.xml", FileTypeFlags::NONE);
    add("html", "text.html", FileTypeFlags::NONE);
    add("intentdefinition", "file.intentdefinition", FileTypeFlags::NONE);
    add("js", "sourcecode.javascript", FileTypeFlags::NONE);
    add("json", "text.json", FileTypeFlags::NONE);
    add("markdown", "net.daringfireball.markdown", FileTypeFlags::NONE);
    add("md", "net.daringfireball.markdown", FileTypeFlags::NONE);
    add("modulemap", "sourcecode.module", FileTypeFlags::NONE);
    add("mp3", "audio.mp3", FileTypeFlags::NONE);
    add("sh", "text.script.sh", FileTypeFlags::NONE);
    add("ts", "sourcecode.javascript", FileTypeFlags::NONE);
    add("tsx", "sourcecode.javascript", FileTypeFlags::NONE);
    add("ttf", "file", FileTypeFlags::NONE);
    add("wav", "audio.wav", FileTypeFlags::NONE);
    add("xcconfig", "text.xcconfig", FileTypeFlags::NONE);
    add("xml", "text.xml", FileTypeFlags::NONE);
    add("yaml", "text.yaml", FileTypeFlags::NONE);
    add("yml", "text.yaml", FileTypeFlags::NONE);
    add("zip", "archive.zip", FileTypeFlags::NONE);

    m
});

/// Look up the catalog entry for a bare extension (no leading dot).
pub fn lookup(extension: &str) -> Option<FileTypeEntry> {
    FILE_TYPES.get(extension).copied()
}

/// Look up the catalog entry for a path, keyed on its extension.
pub fn lookup_path(path: &str) -> Option<FileTypeEntry> {
    let ext = path.rsplit_once('.').map(|(_, ext)| ext)?;
    lookup(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swift_is_a_compiler_input() {
        let entry = lookup("swift").unwrap();
        assert!(entry.flags.contains(FileTypeFlags::COMPILER));
        assert_eq!(entry.uti, "sourcecode.swift");
    }

    #[test]
    fn header_is_not_a_compiler_input() {
        let entry = lookup("h").unwrap();
        assert!(entry.flags.contains(FileTypeFlags::HEADER));
        assert!(!entry.flags.contains(FileTypeFlags::COMPILER));
    }

    #[test]
    fn static_archive_is_link_library() {
        assert!(lookup("a").unwrap().flags.contains(FileTypeFlags::LINK_LIBRARY));
    }

    #[test]
    fn supplemental_entries_carry_no_flags() {
        let entry = lookup("json").unwrap();
        assert_eq!(entry.flags, FileTypeFlags::NONE);
    }

    #[test]
    fn lookup_path_uses_extension() {
        let entry = lookup_path("Sources/AppDelegate.m").unwrap();
        assert_eq!(entry.uti, "sourcecode.c.objc");
    }

    #[test]
    fn unknown_extension_returns_none() {
        assert!(lookup("frobnicate").is_none());
    }

    #[test]
    fn plist_txt_and_bundle_are_resources() {
        for ext in ["plist", "txt", "bundle"] {
            let entry = lookup(ext).unwrap();
            assert!(entry.flags.contains(FileTypeFlags::RESOURCE), "{ext} should be a Resource");
        }
        assert_eq!(lookup("bundle").unwrap().uti, "wrapper.cfbundle");
    }
}
